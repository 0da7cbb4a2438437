use std::io::{Result, Write};

use students_store::record::Student;

const HEADERS: [&str; 6] = ["#", "Name", "Surname", "Date", "Score", "Country"];

fn row_cells(row: usize, student: &Student) -> [String; 6] {
    [
        row.to_string(),
        student.name.clone(),
        student.surname.clone(),
        student.date.clone(),
        student.score.to_string(),
        student.country.to_string(),
    ]
}

fn write_line<W: Write>(output: &mut W, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<String>>()
        .join(" | ");
    writeln!(output, "{}", line.trim_end())
}

/// Writes the view as a table numbered from 1.
pub fn render<W: Write>(output: &mut W, view: &[&Student]) -> Result<()> {
    if view.is_empty() {
        return writeln!(output, "No students to show.");
    }

    let rows: Vec<[String; 6]> = view
        .iter()
        .enumerate()
        .map(|(idx, student)| row_cells(idx + 1, student))
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|header| header.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<String> = HEADERS.iter().map(|header| header.to_string()).collect();
    write_line(output, &headers, &widths)?;
    writeln!(
        output,
        "{}",
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<String>>()
            .join("-+-")
    )?;
    for row in &rows {
        write_line(output, row, &widths)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use students_store::record::{Country, RecordId, Score, Student, StudentFields};

    use super::render;

    #[test]
    fn test_render_empty() {
        let mut output = Vec::new();
        render(&mut output, &[]).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "No students to show.\n");
    }

    #[test]
    fn test_render_rows() {
        let student = Student::new(
            RecordId::from("1"),
            StudentFields {
                name: "Ali".to_string(),
                surname: "Vali".to_string(),
                date: "2024-01-01".to_string(),
                score: Score::try_from(85).unwrap(),
                country: Country::Usa,
            },
        );

        let mut output = Vec::new();
        render(&mut output, &[&student]).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# | Name | Surname | Date       | Score | Country");
        assert_eq!(lines[1], "--+------+---------+------------+-------+--------");
        assert_eq!(lines[2], "1 | Ali  | Vali    | 2024-01-01 | 85    | USA");
    }
}
