use quorem_math::{calc_quo_rem, DivisionError, QuoRem};

fn print_result(label: &str, a: i32, b: i32, res: QuoRem) {
    print!("{}", format_result(label, a, b, res));
}

fn format_result(label: &str, a: i32, b: i32, res: QuoRem) -> String {
    format!(
        "{label}\na = {a}\nb = {b}\nquo = {quo}\nrem = {rem}\n\n",
        quo = res.quo,
        rem = res.rem,
    )
}

fn main() -> Result<(), DivisionError> {
    let (a, b) = (100, 7);
    let res = calc_quo_rem(a, b)?;
    print_result("Test 1", a, b, res);

    let (a, b) = (200, 10);
    let res = calc_quo_rem(a, b)?;
    print_result("Test 2", a, b, res);

    let (a, b) = (300, -17);
    let res = calc_quo_rem(a, b)?;
    print_result("Test 3", a, b, res);

    Ok(())
}
