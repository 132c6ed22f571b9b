//! Interactive collection of observation parameters.
//!
//! Each prompt is a local recoverable loop: invalid input re-prompts, it
//! never aborts the run. Entering the abort sentinel (`q`) returns `None`
//! and the caller ends the run cleanly without touching the catalog.

use std::io::{self, BufRead, Write};

use crate::constants::ABORT_SENTINEL;
use crate::error::{Result, SelectorError};
use crate::models::ObservationParams;

/// Right ascension must lie strictly inside (0, 360) degrees.
pub fn valid_ra(value: f64) -> bool {
    value > 0.0 && value < 360.0
}

/// Declination must lie in [-90, 90] degrees.
pub fn valid_dec(value: f64) -> bool {
    (-90.0..=90.0).contains(&value)
}

/// Field-of-view width must lie strictly inside (0, 360) degrees.
pub fn valid_fov_h(value: f64) -> bool {
    value > 0.0 && value < 360.0
}

/// Field-of-view height must lie in [-90, 90] degrees.
pub fn valid_fov_v(value: f64) -> bool {
    (-90.0..=90.0).contains(&value)
}

/// Collect all observation parameters from stdin.
///
/// Returns `None` when the user aborts at any prompt.
pub fn collect_observation_params() -> Result<Option<ObservationParams>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    collect_params_from(&mut reader, &mut writer)
}

/// Prompt-loop implementation over explicit reader/writer handles.
pub fn collect_params_from(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<Option<ObservationParams>> {
    let ra = match prompt_f64(
        reader,
        writer,
        "Observation RA in degrees (0-360 exclusive)",
        valid_ra,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };

    let dec = match prompt_f64(
        reader,
        writer,
        "Observation Decl in degrees (-90 to 90)",
        valid_dec,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };

    let fov_h = match prompt_f64(
        reader,
        writer,
        "Field-of-view width in degrees (0-360 exclusive)",
        valid_fov_h,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };

    let fov_v = match prompt_f64(
        reader,
        writer,
        "Field-of-view height in degrees (-90 to 90)",
        valid_fov_v,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };

    let top_n = match prompt_usize(reader, writer, "Number of objects to report")? {
        Some(value) => value,
        None => return Ok(None),
    };

    Ok(Some(ObservationParams {
        ra,
        dec,
        fov_h,
        fov_v,
        top_n,
    }))
}

/// Prompt for a float until `valid` accepts it or the user aborts.
fn prompt_f64(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
    valid: impl Fn(f64) -> bool,
) -> Result<Option<f64>> {
    loop {
        let input = match read_line(reader, writer, prompt)? {
            Some(input) => input,
            None => return Ok(None),
        };

        match input.parse::<f64>() {
            Ok(value) if valid(value) => return Ok(Some(value)),
            Ok(value) => {
                writeln!(writer, "Value {} is out of range, try again.", value)
                    .map_err(SelectorError::Io)?;
            }
            Err(_) => {
                writeln!(writer, "'{}' is not a number, try again.", input)
                    .map_err(SelectorError::Io)?;
            }
        }
    }
}

/// Prompt for a positive integer until one is given or the user aborts.
fn prompt_usize(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<Option<usize>> {
    loop {
        let input = match read_line(reader, writer, prompt)? {
            Some(input) => input,
            None => return Ok(None),
        };

        match input.parse::<usize>() {
            Ok(value) if value >= 1 => return Ok(Some(value)),
            _ => {
                writeln!(writer, "'{}' is not a positive integer, try again.", input)
                    .map_err(SelectorError::Io)?;
            }
        }
    }
}

/// Display the prompt and read one trimmed line; `None` on the abort
/// sentinel or end of input.
fn read_line(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(writer, "{} ['{}' to abort]: ", prompt, ABORT_SENTINEL).map_err(SelectorError::Io)?;
    writer.flush().map_err(SelectorError::Io)?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(SelectorError::Io)?;
    if bytes == 0 {
        // End of input behaves like an abort
        return Ok(None);
    }

    let input = input.trim().to_string();
    if input.eq_ignore_ascii_case(ABORT_SENTINEL) {
        return Ok(None);
    }
    Ok(Some(input))
}
