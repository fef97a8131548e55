// Example demonstrating the simple API

use picoscalar::{parse, parse_with_outcome, ParseError, Value};

fn main() -> Result<(), ParseError> {
    let inputs = ["null", " true ", "false", "-1.5e3", "0.1", "012", "1e400", "42 x", ""];

    println!("Using picoscalar::parse():");
    for input in inputs {
        match parse(input) {
            Ok(Value::Number(n)) => println!("{input:?} -> Number: {n}"),
            Ok(Value::True) => println!("{input:?} -> Bool: true"),
            Ok(Value::False) => println!("{input:?} -> Bool: false"),
            Ok(Value::Null) => println!("{input:?} -> Null"),
            Err(e) => println!("{input:?} -> Error: {e}"),
        }
    }

    println!();
    println!("Using picoscalar::parse_with_outcome():");
    for input in inputs {
        let (value, outcome) = parse_with_outcome(input);
        println!("{input:?} -> {outcome:?}, {value:?}");
    }

    let value = parse("3.25")?;
    println!();
    println!("As f64: {:?}", value.as_f64());
    Ok(())
}
