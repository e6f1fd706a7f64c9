use crate::catalog::CustomerDirectory;
use crate::error::CatalogError;
use crate::orders::Customer;

fn directory() -> CustomerDirectory {
    let mut customers = CustomerDirectory::default();
    for name in ["Carolina Méndez", "ana López", "Beto Ramírez", "Ana María Castillo"] {
        customers.register(Customer::new(name, "5555-0000", "Zona 10")).unwrap();
    }
    customers
}

#[test]
fn register_assigns_sequential_ids() {
    let mut customers = directory();
    assert_eq!(customers.len(), 4);
    let ids: Vec<u32> = customers.list().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(customers.find_by_id(3).map(|c| c.name.as_str()), Some("Beto Ramírez"));
    assert!(customers.find_by_id(9).is_none());

    let id = customers.register(Customer::new("Diego Paz", "5555-1111", "Zona 1")).unwrap();
    assert_eq!(id, 5);
}

#[test]
fn blank_name_is_rejected() {
    let mut customers = directory();
    assert!(matches!(customers.register(Customer::new("   ", "", "")), Err(CatalogError::MissingName)));
    assert_eq!(customers.len(), 4);
}

#[test]
fn sorted_by_name_ignores_case_and_keeps_the_directory() {
    let customers = directory();
    let names: Vec<String> = customers.sorted_by_name().into_iter().map(|c| c.customer.name).collect();
    assert_eq!(names, vec!["ana López", "Ana María Castillo", "Beto Ramírez", "Carolina Méndez"]);
    assert_eq!(customers.list()[0].name(), "Carolina Méndez");
}

#[test]
fn search_returns_every_match_in_registration_order() {
    let customers = directory();
    let found: Vec<u32> = customers.search_by_name("ANA").iter().map(|c| c.id).collect();
    // "Carolina" does not contain "ana"; "Ana María Castillo" and "ana López" do.
    assert_eq!(found, vec![2, 4]);
    assert_eq!(customers.search_by_name("ramírez").len(), 1);
    assert!(customers.search_by_name("Pérez").is_empty());
}
