use anyhow::Result;
use task_core::task::parse_id;
use task_core::Status;
use task_store::Service;

pub fn in_progress(service: &Service, id: &str, json: bool) -> Result<()> {
    run(service, id, Status::InProgress, json)
}

pub fn done(service: &Service, id: &str, json: bool) -> Result<()> {
    run(service, id, Status::Done, json)
}

fn run(service: &Service, id: &str, status: Status, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let task = service.mark_status(id, status)?;
    if json {
        return super::print_json(&task);
    }
    println!("Task {} marked as {}", task.id, task.status);
    Ok(())
}
