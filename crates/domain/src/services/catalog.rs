//! Service catalog management.

use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;
use crate::models::{CreateService, Service};
use crate::repository::CatalogRepository;

const SERVICE: &str = "Service";

/// Adds an active catalog entry.
pub fn add<R: CatalogRepository>(repo: &mut R, input: CreateService) -> Result<Service, DomainError> {
    input.validate()?;

    let service = Service {
        id: Uuid::new_v4(),
        name: input.name.trim().to_string(),
        description: input.description,
        category: input.category.trim().to_string(),
        base_price: input.base_price,
        price_unit: input.price_unit,
        active: true,
    };

    tracing::info!(service_id = %service.id, name = %service.name, category = %service.category, "Service added to catalog");
    repo.insert_service(service.clone());
    Ok(service)
}

/// Flips whether residents can book the service.
pub fn toggle_active<R: CatalogRepository>(repo: &mut R, id: Uuid) -> Result<&Service, DomainError> {
    let service = repo
        .service_mut(id)
        .ok_or_else(|| DomainError::not_found(SERVICE, id))?;

    service.active = !service.active;
    tracing::info!(service_id = %id, active = service.active, "Service availability toggled");
    Ok(&*service)
}

/// Removes a catalog entry. Requests referencing it keep their copied name.
pub fn remove<R: CatalogRepository>(repo: &mut R, id: Uuid) -> Result<Service, DomainError> {
    let removed = repo
        .remove_service(id)
        .ok_or_else(|| DomainError::not_found(SERVICE, id))?;
    tracing::info!(service_id = %id, name = %removed.name, "Service removed from catalog");
    Ok(removed)
}

/// Case-insensitive match on name or category. A blank query matches all.
pub fn search<'a, R: CatalogRepository>(repo: &'a R, query: &str) -> Vec<&'a Service> {
    let needle = query.trim().to_lowercase();
    repo.services()
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Distinct categories in catalog order.
pub fn categories<R: CatalogRepository>(repo: &R) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for service in repo.services() {
        if !seen.contains(&service.category.as_str()) {
            seen.push(&service.category);
        }
    }
    seen
}

pub fn active_count<R: CatalogRepository>(repo: &R) -> usize {
    repo.services().iter().filter(|s| s.active).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::VecStore;

    fn input(name: &str, category: &str, base_price: i64) -> CreateService {
        CreateService {
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            base_price,
            price_unit: "/visit".to_string(),
        }
    }

    fn catalog() -> VecStore {
        let mut store = VecStore::default();
        add(&mut store, input("AC Repair", "Appliances", 499)).unwrap();
        add(&mut store, input("Deep Cleaning", "Cleaning", 1999)).unwrap();
        add(&mut store, input("Fridge Repair", "Appliances", 399)).unwrap();
        store
    }

    #[test]
    fn test_add_is_active() {
        let store = catalog();
        assert_eq!(store.services.len(), 3);
        assert!(store.services.iter().all(|s| s.active));
        assert_eq!(active_count(&store), 3);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut store = VecStore::default();
        assert!(matches!(
            add(&mut store, input("Car Wash", "Cleaning", 0)).unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(add(&mut store, input(" ", "Cleaning", 100)).is_err());
        assert!(store.services.is_empty());
    }

    #[test]
    fn test_toggle_active() {
        let mut store = catalog();
        let id = store.services[1].id;

        assert!(!toggle_active(&mut store, id).unwrap().active);
        assert_eq!(active_count(&store), 2);
        assert!(toggle_active(&mut store, id).unwrap().active);
        assert!(toggle_active(&mut store, Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_remove() {
        let mut store = catalog();
        let id = store.services[0].id;

        assert_eq!(remove(&mut store, id).unwrap().name, "AC Repair");
        assert_eq!(store.services.len(), 2);
        assert!(matches!(
            remove(&mut store, id).unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[test]
    fn test_search_by_name_or_category() {
        let store = catalog();
        let names = |query: &str| -> Vec<String> {
            search(&store, query).iter().map(|s| s.name.clone()).collect()
        };

        assert_eq!(names("repair"), vec!["AC Repair", "Fridge Repair"]);
        assert_eq!(names("CLEAN"), vec!["Deep Cleaning"]);
        assert_eq!(names("").len(), 3);
        assert!(names("gardening").is_empty());
    }

    #[test]
    fn test_categories_distinct_in_order() {
        let store = catalog();
        assert_eq!(categories(&store), vec!["Appliances", "Cleaning"]);
    }
}
