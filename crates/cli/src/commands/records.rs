use anyhow::Result;
use phonebook_core::validation::validate_person;
use phonebook_service::{PersonService, ServiceError};

use crate::open_storage;

pub(crate) async fn run_list() -> Result<()> {
    let service = PersonService::new(open_storage(false).await?);
    let persons = service.list().await?;
    println!("phonebook:\n");
    for person in &persons {
        println!("{} {}", person.name, person.number);
    }
    println!("\ntotal: {}", persons.len());
    Ok(())
}

pub(crate) async fn run_add(name: String, number: String) -> Result<()> {
    let input = validate_person(&serde_json::json!({ "name": name, "number": number }))?;
    let service = PersonService::new(open_storage(false).await?);
    match service.create(&input).await {
        Ok(person) => {
            println!("added {} to phonebook", person.name);
            Ok(())
        },
        Err(ServiceError::Rejected(descriptor)) => {
            anyhow::bail!("{}", descriptor.messages().join("\n"))
        },
        Err(e) => Err(e.into()),
    }
}
