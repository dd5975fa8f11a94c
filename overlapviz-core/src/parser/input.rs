use std::path::Path;

use snafu::{OptionExt, ResultExt};
use tracing::*;

use crate::{
    analysis::{bbox::Bbox, point::Point},
    consts::{COORD_TOKENS, LABEL_TOKEN, TAG_TOKEN},
    error::*,
    layout::{element::LabeledBox, group::BoxGroups},
    parser::{InvalidBoxPolicy, ParserConfig},
};

/// Parses one input line.
///
/// # Returns
/// `Ok(None)` for lines that are not box records (one token or fewer, or a
/// different tag), `Ok(Some(_))` for a well-formed record.
///
/// # Errors
/// A box record with a missing or non-integer coordinate, or with inverted
/// corners under [`InvalidBoxPolicy::Skip`].
pub fn parse_line(
    line: &str,
    line_no: usize,
    config: &ParserConfig,
) -> Result<Option<LabeledBox>, OverlapError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() <= 1 || tokens[TAG_TOKEN] != config.tag {
        return Ok(None);
    }

    let mut coords = [0i32; 4];
    for (slot, index) in coords.iter_mut().zip(COORD_TOKENS) {
        let token = tokens
            .get(index)
            .context(MissingTokenSnafu { line_no, index })?;
        *slot = token
            .parse::<i32>()
            .context(ParseCoordinateSnafu { line_no, token: *token })?;
    }
    let [min_x, min_z, max_x, max_z] = coords;
    let (min, max) = (Point::new(min_x, min_z), Point::new(max_x, max_z));

    let bbox = match config.invalid_box {
        InvalidBoxPolicy::Skip => Bbox::try_new(min, max)?,
        InvalidBoxPolicy::Repair => {
            let bbox = Bbox::new(min, max);
            if !bbox.is_valid() {
                warn!("line {line_no}: repairing inverted box {bbox}");
            }
            bbox.repaired()
        }
    };

    Ok(Some(LabeledBox {
        label: tokens[LABEL_TOKEN].to_string(),
        bbox,
        line_no,
    }))
}

/// Parses a whole input document into label groups.
///
/// Malformed box records are skipped with a warning unless `config.strict`
/// is set, in which case the first one is returned as the error.
pub fn parse_str(text: &str, config: &ParserConfig) -> Result<BoxGroups, OverlapError> {
    let mut groups = BoxGroups::new();
    let mut skipped = 0usize;

    for (idx, line) in text.lines().enumerate() {
        match parse_line(line, idx + 1, config) {
            Ok(Some(labeled)) => groups.push(labeled),
            Ok(None) => {}
            Err(err) if !config.strict => {
                warn!("skipping malformed record: {err}");
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        "parsed {} boxes in {} groups, skipped {} records",
        groups.len(),
        groups.labels().count(),
        skipped
    );
    Ok(groups)
}

pub fn parse_file<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<BoxGroups, OverlapError> {
    let path = path.as_ref();
    info!("reading boxes from {}", path.display());

    let text = std::fs::read_to_string(path).context(ReadInputSnafu {
        path: path.to_string_lossy(),
    })?;
    parse_str(&text, config)
}
