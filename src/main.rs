use anyhow::{Context, Result};
use std::env;

// Use library instead of local modules
use salary_report::{
    Accountant, ConsolePrinter, EmployeePrinter, EmployeeReader, HierarchyBuilder, Printer,
};

const DEFAULT_EMPLOYEES_FILE: &str = "employees.csv";

// The requirement is to report discrepancies for employees with at most
// 4 managers between them and the CEO: the CEO's level, 4 manager levels,
// and the level they manage make 6 levels in total.
const DEFAULT_LEVEL_DEPTH: usize = 6;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut path = DEFAULT_EMPLOYEES_FILE.to_string();
    let mut level_depth = DEFAULT_LEVEL_DEPTH;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json = true,
            "--depth" => {
                i += 1;
                level_depth = args
                    .get(i)
                    .context("--depth requires a value")?
                    .parse()
                    .context("--depth must be a positive integer")?;
            }
            other => path = other.to_string(),
        }
        i += 1;
    }

    // 1. Read employees from the CSV file
    let reader = EmployeeReader::new();
    let employees = reader.read(&path)?;

    // 2. Build the organizational structure
    let structure = HierarchyBuilder::new().build(employees)?;

    // 3. The accountant computes salary statistics over the structure
    let accountant = Accountant::new(structure);
    let average_salary_by_level = accountant.average_salary_by_level();

    if json {
        // Machine-readable mode: per-level averages as JSON, nothing else
        println!("{}", serde_json::to_string_pretty(&average_salary_by_level)?);
        return Ok(());
    }

    for (level, salary) in &average_salary_by_level {
        println!("The average salary of level {} is: {:.2}", level, salary);
    }

    // 4. Print the salary discrepancy report
    let report = accountant.create_salary_report();
    let mut printer = EmployeePrinter::new(Box::new(ConsolePrinter));
    printer.print("");
    report.print_report(&mut printer, level_depth)?;

    Ok(())
}
