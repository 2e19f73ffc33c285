//! Manor Walk - Scripted Walkthrough Demo
//!
//! Runs the player controller through the manor hall without a window:
//! the script pumps synthetic input, a toy body integrates the jump arc,
//! and every seam logs what the controller pushed through it. Set
//! RUST_LOG to adjust verbosity; the demo defaults to info.

use prowl_engine::game::run_walkthrough;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("===========================================");
    println!("   Prowl - Manor Walkthrough");
    println!("===========================================");
    println!();

    match run_walkthrough() {
        Ok(report) => {
            println!();
            println!("Route complete after {} ticks.", report.ticks);
            println!(
                "  final position   : ({:.2}, {:.2}, {:.2})",
                report.final_position.x, report.final_position.y, report.final_position.z
            );
            println!("  noise left behind: {:.4}", report.noise_accumulated);
            println!(
                "  prompt shown     : {}",
                if report.prompt_was_shown { "yes" } else { "no" }
            );
            println!("  jumps            : {}", report.jumps);
            println!("  provocations     : {:?}", report.provocations);
        }
        Err(err) => {
            eprintln!("walkthrough failed to start: {}", err);
            std::process::exit(1);
        }
    }
}
