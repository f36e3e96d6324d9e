use anyhow::Result;
use task_core::task::parse_id;
use task_store::Service;

pub fn run(service: &Service, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    service.delete(id)?;
    if json {
        println!("{}", serde_json::json!({ "deleted": id }));
    } else {
        println!("Task {} deleted successfully", id);
    }
    Ok(())
}
