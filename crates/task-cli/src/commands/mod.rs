pub mod add;
pub mod delete;
pub mod list;
pub mod mark;
pub mod update;

use anyhow::Result;
use task_core::Task;

/// Print a single task as pretty JSON.
fn print_json(task: &Task) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(task)?);
    Ok(())
}
