use anyhow::Result;
use task_core::task::parse_id;
use task_store::Service;

pub fn run(service: &Service, id: &str, description: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let task = service.update(id, description)?;
    if json {
        return super::print_json(&task);
    }
    println!("Task {} updated successfully", task.id);
    Ok(())
}
