//! Scripted walkthrough of every roster operation against a freshly seeded
//! store. Individual operation failures are expected and only printed.

use crate::commands;
use crate::render;
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    render::banner();

    render::section("PART 4: INSERTING SAMPLE DATA");
    commands::seed(conn).context("failed to insert sample data")?;

    render::section("CREATE: Testing Successful Assignments");
    successful_assignments(conn)?;

    render::section("READ: Display All Active Assignments");
    commands::list(conn, false)?;

    render::section("CREATE: Testing Failed Assignments (Validations)");
    failed_assignments(conn)?;

    render::section("UPDATE: Deactivate Employee and Their Projects");
    deactivations(conn)?;

    render::section("DELETE: Remove Inactive Employee");
    deletions(conn)?;

    render::section("FINAL STATE: All Active Assignments");
    commands::list(conn, false)?;
    Ok(())
}

fn successful_assignments(conn: &Connection) -> Result<()> {
    println!("Test 1: Assign Alice (ID:1) to E-Commerce Platform (ID:1)");
    commands::assign(conn, 1, 1)?;

    println!("\nTest 2: Assign Bob (ID:2) to E-Commerce Platform (ID:1)");
    commands::assign(conn, 2, 1)?;

    println!("\nTest 3: Assign Alice (ID:1) to Mobile Banking App (ID:2)");
    commands::assign(conn, 1, 2)?;
    Ok(())
}

fn failed_assignments(conn: &Connection) -> Result<()> {
    println!("Test 1: Non-existent Employee (ID:999)");
    commands::assign(conn, 999, 1)?;

    println!("\nTest 2: Inactive Employee (Eve - ID:5)");
    commands::assign(conn, 5, 1)?;

    println!("\nTest 3: Non-existent Project (ID:999)");
    commands::assign(conn, 1, 999)?;

    println!("\nTest 4: Duplicate Assignment (Alice already on Project 1)");
    commands::assign(conn, 1, 1)?;

    println!("\nTest 5: Employee with 3+ Active Projects");
    commands::assign(conn, 1, 3)?;
    println!("Attempting to assign Alice to a 4th project (should fail):");
    commands::assign(conn, 1, 4)?;

    println!("\nTest 6: Project with 10+ Active Employees");
    println!("Assigning multiple employees to Project 2...");
    for employee_id in 2..=4 {
        commands::assign(conn, employee_id, 2)?;
    }
    Ok(())
}

fn deactivations(conn: &Connection) -> Result<()> {
    println!("Deactivating Bob Smith (ID:2) and all his active projects...\n");
    commands::deactivate(conn, 2)?;

    println!("\nAttempting to deactivate non-existent employee (ID:999)...\n");
    commands::deactivate(conn, 999)?;
    Ok(())
}

fn deletions(conn: &Connection) -> Result<()> {
    println!("Attempting to delete inactive employee Eve Davis (ID:5)...\n");
    commands::delete(conn, 5)?;

    println!("\nAttempting to delete active employee Alice (ID:1) - should fail...\n");
    commands::delete(conn, 1)?;
    Ok(())
}
