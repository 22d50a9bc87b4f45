//! The `demo` command - walk through the container operations.

use std::process::ExitCode;

use dynarray::script::letters;
use dynarray::{ArrayOptions, Result};

/// Run the demo command.
pub fn run(options: ArrayOptions) -> ExitCode {
    match walkthrough(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn walkthrough(options: ArrayOptions) -> Result<()> {
    let mut a1 = letters("abcdef", options);
    println!("a1 = {a1}");

    println!("a1.insert(3, [s]) = {}", a1.insert(3, &letters("s", options))?);
    println!("a1.append([w, x, y, z]) = {}", a1.append(&letters("wxyz", options)));
    println!("a1.extract(2, 4) = {}", a1.extract(2, 4)?);
    println!("a1.delete(2, 4) = {}", a1.delete(2, 4)?);

    // The view aliases a1 until a1 has to reallocate.
    let mut view = a1.sublist(1, 4)?;
    println!("view = a1.sublist(1, 4) = {view}");
    view.set(2, 'X')?;
    println!("view.set(2, 'X') -> a1 = {a1}");

    a1.push('g');
    println!("a1.push('g') -> a1 = {a1}, view = {view}");
    view.set(3, 'Y')?;
    println!("view.set(3, 'Y') -> a1 = {a1}, view = {view}");

    match a1.delete(4, 2) {
        Ok(deleted) => println!("a1.delete(4, 2) = {deleted}"),
        Err(e) => println!("a1.delete(4, 2) failed: {e}"),
    }
    Ok(())
}
