// 🖨️ Printers - Line-oriented output seam
// The report core emits one call per logical line; where those lines go is
// up to the Printer implementation

use crate::employee::Employee;

// ============================================================================
// PRINTER TRAIT
// ============================================================================

/// A line-output capability. Each call carries one logical line; a payload
/// may embed a line break when two lines must travel together.
pub trait Printer {
    fn print(&mut self, line: &str);
}

// ============================================================================
// CONSOLE PRINTER
// ============================================================================

/// Prints lines to stdout.
pub struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print(&mut self, line: &str) {
        println!("{}", line);
    }
}

// ============================================================================
// EMPLOYEE PRINTER
// ============================================================================

/// Decorates any [`Printer`] with employee-aware formatting.
pub struct EmployeePrinter {
    inner: Box<dyn Printer>,
}

impl EmployeePrinter {
    pub fn new(inner: Box<dyn Printer>) -> Self {
        EmployeePrinter { inner }
    }

    /// Print the employee's full name.
    pub fn print_employee(&mut self, employee: &Employee) {
        let line = employee.full_name();
        self.print(&line);
    }

    /// Print the employee's full name followed by a postfix, e.g. a
    /// discrepancy percentage such as `(-32.07%)`.
    pub fn print_employee_with_postfix(&mut self, employee: &Employee, postfix: &str) {
        let line = format!("{} {}", employee.full_name(), postfix);
        self.print(&line);
    }
}

impl Printer for EmployeePrinter {
    fn print(&mut self, line: &str) {
        self.inner.print(line);
    }
}

// ============================================================================
// RECORDING PRINTER (test support)
// ============================================================================

/// Captures printed lines for assertions. The handle is cheaply cloneable so
/// a test can keep one end while the printer is boxed away.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingPrinter {
    lines: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl RecordingPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

#[cfg(test)]
impl Printer for RecordingPrinter {
    fn print(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================
