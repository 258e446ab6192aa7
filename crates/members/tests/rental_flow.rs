//! End-to-end rental flow across the inventory and members crates.

use rentledger_core::RentalError;
use rentledger_inventory::{Equipment, Inventory};
use rentledger_members::Member;

const START: &str = "2022-03-15";
const END: &str = "2022-03-16";

#[test]
fn maintained_inventory_drives_rental_costs() {
    let mut inventory = Inventory::new();
    inventory.add_equipment(Equipment::new("W03 Pyranha Burn", 1)).unwrap();
    inventory.add_equipment(Equipment::new("P05 TNP Rapa", 1)).unwrap();
    inventory
        .add_equipment(Equipment::new("W04 Wavesport Diesel", 2).with_availability(false))
        .unwrap();
    assert_eq!(inventory.size(), 3);

    let mut member = Member::new("Wojciech", 50);

    // Added equipment is available even though the caller marked it otherwise.
    member
        .rent(&inventory, &["W04 Wavesport Diesel"], START, END, 2)
        .unwrap();
    assert_eq!(member.balance(), 46);

    inventory.update_rental_cost("P05 TNP Rapa", 10).unwrap();
    member
        .rent(&inventory, &["W03 Pyranha Burn", "P05 TNP Rapa"], START, END, 3)
        .unwrap();
    assert_eq!(member.balance(), 13);

    inventory.remove_equipment("W03 Pyranha Burn").unwrap();
    assert_eq!(
        member.rent(&inventory, &["W03 Pyranha Burn"], START, END, 1),
        Err(RentalError::EquipmentNotAvailable)
    );

    assert_eq!(
        member.rent(&inventory, &["P05 TNP Rapa"], START, END, 2),
        Err(RentalError::NotEnoughBalance)
    );
    assert_eq!(member.balance(), 13);
}

#[test]
fn failed_maintenance_leaves_rentals_unaffected() {
    let mut inventory =
        Inventory::with_equipment([Equipment::new("P05 TNP Rapa", 1)]).unwrap();

    assert_eq!(
        inventory.add_equipment(Equipment::new("P05 TNP Rapa", 40)),
        Err(RentalError::AlreadyExists)
    );
    assert_eq!(
        inventory.update_rental_cost("W02 Pyranha Burn", 40),
        Err(RentalError::NotExists)
    );
    assert_eq!(
        inventory.remove_equipment("W02 Pyranha Burn"),
        Err(RentalError::NotExists)
    );

    let mut member = Member::new("Wojciech", 5);
    member.rent(&inventory, &["P05 TNP Rapa"], START, END, 5).unwrap();
    assert_eq!(member.balance(), 0);
}
