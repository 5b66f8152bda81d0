mod args;

use std::fmt::Display;

use colored::Colorize;
use pstack::{CheckpointStack, Error};

use args::Args;

fn print_values<T: Display>(values: impl IntoIterator<Item = T>) {
    values
        .into_iter()
        .enumerate()
        .for_each(|(i, value)| println!("{}: {}", i, value));

    println!("{}", "==========".purple());
}

/// Pop till the remember point, printing whatever got drained if the point could not
/// be reached
fn pop_till_reporting<T: Display>(
    stack: &mut CheckpointStack<T>,
    label: &str,
) -> Result<Vec<T>, Error> {
    stack.pop_till(label).map_err(|drain| {
        let (popped, e) = drain.into_parts();
        if !popped.is_empty() {
            eprintln!("{} value(s) popped before failing:", popped.len());
            print_values(popped);
        }

        e
    })
}

fn run(args: &Args) -> Result<(), Error> {
    let mut stack = CheckpointStack::new();

    ["A", "B", "C", "D"].iter().for_each(|v| stack.push(*v));
    stack.remember_point(args.label().to_owned())?;
    ["E", "F", "G"].iter().for_each(|v| stack.push(*v));

    print_values(stack.peek_till(args.label())?);
    print_values(pop_till_reporting(&mut stack, args.pop_label())?);
    print_values(stack.pop_all());

    Ok(())
}

fn main() {
    let args = Args::handle();

    if args.debug() {
        pstack::log::enable();
    }

    if let Err(e) = run(&args) {
        e.emit();
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pstack::ErrKind;
    use structopt::StructOpt;

    #[test]
    fn t_reporting_stale_point() {
        let mut stack = CheckpointStack::new();
        stack.push(1);
        stack.remember_point(String::from("p")).unwrap();
        stack.pop().unwrap();
        stack.push(2);
        stack.push(3);

        let e = pop_till_reporting(&mut stack, "p").unwrap_err();

        assert_eq!(e.kind(), ErrKind::CheckpointUnreachable);
        assert!(stack.is_empty());
    }

    #[test]
    fn t_run_unknown_pop_label() {
        let args = Args::from_iter(["pstack", "--pop-label", "point2"]);

        assert_eq!(run(&args).unwrap_err().kind(), ErrKind::CheckpointNotFound);
    }

    #[test]
    fn t_run_default_label() {
        let args = Args::from_iter(["pstack"]);

        assert!(run(&args).is_ok());
    }
}
