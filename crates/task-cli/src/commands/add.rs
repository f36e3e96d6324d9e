use anyhow::Result;
use task_store::Service;

pub fn run(service: &Service, description: &str, json: bool) -> Result<()> {
    let task = service.add(description)?;
    if json {
        return super::print_json(&task);
    }
    println!("Task added successfully (ID: {})", task.id);
    Ok(())
}
