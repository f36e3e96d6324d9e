use anyhow::Result;
use task_store::Service;

pub fn run(service: &Service, status: Option<&str>, json: bool) -> Result<()> {
    let tasks = service.list(status)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    for task in &tasks {
        println!("[{}] {} ({})", task.id, task.description, task.status);
    }
    Ok(())
}
