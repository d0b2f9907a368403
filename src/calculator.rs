// calculator.rs

use crate::error::CalcError;
use crate::history::History;

/// Checked 32-bit integer calculator. Every successful operation appends a
/// record like `"2 + 2 = 4"` to the bound history sink; a failed operation
/// returns an error and writes nothing.
pub struct SimpleCalculator<'a> {
    history: &'a mut dyn History,
}

impl<'a> SimpleCalculator<'a> {
    pub fn new(history: &'a mut dyn History) -> Self {
        Self { history }
    }

    /// Rebinds the history sink used by subsequent operations. Records
    /// already written stay where they are.
    pub fn set_history(&mut self, history: &'a mut dyn History) {
        self.history = history;
    }

    /// Read access to the currently bound sink.
    pub fn history(&self) -> &dyn History {
        self.history
    }

    pub fn add(&mut self, a: i32, b: i32) -> Result<i32, CalcError> {
        if addition_overflows(a, b) {
            return Err(CalcError::AdditionOverflow);
        }
        let result = a + b;
        self.log_operation(a, "+", b, result);
        Ok(result)
    }

    pub fn subtract(&mut self, a: i32, b: i32) -> Result<i32, CalcError> {
        if subtraction_overflows(a, b) {
            return Err(CalcError::SubtractionOverflow);
        }
        let result = a - b;
        self.log_operation(a, "-", b, result);
        Ok(result)
    }

    pub fn multiply(&mut self, a: i32, b: i32) -> Result<i32, CalcError> {
        if multiplication_overflows(a, b) {
            return Err(CalcError::MultiplicationOverflow);
        }
        let result = a * b;
        self.log_operation(a, "*", b, result);
        Ok(result)
    }

    /// Truncating division. The zero divisor is rejected before the single
    /// overflow case (`i32::MIN / -1`).
    pub fn divide(&mut self, a: i32, b: i32) -> Result<i32, CalcError> {
        if b == 0 {
            return Err(CalcError::DivisionByZero);
        }
        if a == i32::MIN && b == -1 {
            return Err(CalcError::DivisionOverflow);
        }
        let result = a / b;
        self.log_operation(a, "/", b, result);
        Ok(result)
    }

    fn log_operation(&mut self, a: i32, op: &str, b: i32, result: i32) {
        self.history.add_entry(format!("{a} {op} {b} = {result}"));
    }
}

fn addition_overflows(a: i32, b: i32) -> bool {
    (b > 0 && a > i32::MAX - b) || (b < 0 && a < i32::MIN - b)
}

fn subtraction_overflows(a: i32, b: i32) -> bool {
    (b < 0 && a > i32::MAX + b) || (b > 0 && a < i32::MIN + b)
}

fn multiplication_overflows(a: i32, b: i32) -> bool {
    if a == 0 || b == 0 {
        return false;
    }
    // i32::MIN has no positive counterpart, so negating it overflows
    if (a == -1 && b == i32::MIN) || (b == -1 && a == i32::MIN) {
        return true;
    }
    // multiply-then-divide only round-trips when the product fit
    let product = a.wrapping_mul(b);
    product / b != a
}
