//! CSV export of a monthly statement
//!
//! Writes the untruncated rows of one month for spreadsheet use.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::MonthlyStatement;

const HEADER: [&str; 4] = ["Date", "Description", "Category", "Amount"];

/// Export the statement's expenses to CSV, in statement order
pub fn export_statement_csv<W: Write>(
    statement: &MonthlyStatement,
    writer: W,
) -> ExpenseResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(HEADER).map_err(export_error)?;

    for expense in &statement.expenses {
        out.write_record([
            expense.calendar_date().format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            expense.category.to_string(),
            expense.amount.format_fixed(),
        ])
        .map_err(export_error)?;
    }

    out.flush()?;

    tracing::debug!(
        month = %statement.month,
        rows = statement.expenses.len(),
        "exported statement csv"
    );
    Ok(())
}

/// Export the statement into an in-memory buffer
pub fn statement_csv_bytes(statement: &MonthlyStatement) -> ExpenseResult<Vec<u8>> {
    let mut buffer = Vec::new();
    export_statement_csv(statement, &mut buffer)?;
    Ok(buffer)
}

fn export_error(e: csv::Error) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportMonth;
    use crate::reports::test_support::{date, expense};

    #[test]
    fn test_export_statement_csv() {
        let expenses = vec![
            expense("Groceries, weekly", 250_050, "Food & Dining", date(2025, 3, 2)),
            expense("April rent", 1_500_000, "Bills & Utilities", date(2025, 4, 1)),
            expense(
                "A description that is much longer than the table allows",
                -1_000,
                "Shopping",
                date(2025, 3, 9),
            ),
        ];
        let statement = MonthlyStatement::generate(&expenses, ReportMonth::new(2025, 3).unwrap());

        let bytes = statement_csv_bytes(&statement).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Date,Description,Category,Amount");
        assert_eq!(lines[1], "2025-03-02,\"Groceries, weekly\",Food & Dining,2500.50");
        assert_eq!(
            lines[2],
            "2025-03-09,A description that is much longer than the table allows,Shopping,-10.00"
        );
    }

    #[test]
    fn test_empty_statement_writes_header_only() {
        let statement = MonthlyStatement::generate(&[], ReportMonth::new(2025, 3).unwrap());
        let text = String::from_utf8(statement_csv_bytes(&statement).unwrap()).unwrap();
        assert_eq!(text, "Date,Description,Category,Amount\n");
    }
}
