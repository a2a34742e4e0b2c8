use skip_error::SkipError;

use super::{Configuration, SlotGroup};
use crate::errors::LineParseError;

const INNER_CIRCLE_DIAMETER: &str = "inner_circle_diameter";
const OUTER_CIRCLE_DIAMETER: &str = "outer_circle_diameter";
const SECTOR: &str = "sector";

/// The effect of one accepted line.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    InnerCircleDiameter(f64),
    OuterCircleDiameter(f64),
    Sector(SlotGroup),
}

/// A line that [`parse`] dropped, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: LineParseError,
}

/// Parse a single line of blade configuration text.
///
/// * a line whose first field starts with `#` is a comment;
/// * everything from the first `//` onwards is dropped, wherever it falls;
/// * what is left is split on `,` and needs at least two fields;
/// * `inner_circle_diameter,D`, `outer_circle_diameter,D` and
///   `sector,inner_r,outer_r,count,ratio` are understood, extra trailing
///   fields are ignored.
pub fn parse_line(line: &str) -> Result<Directive, LineParseError> {
    if line.trim().is_empty() {
        return Err(LineParseError::Blank);
    }
    if line.trim_start().starts_with('#') {
        return Err(LineParseError::Comment);
    }
    let clean = match line.find("//") {
        Some(at) => &line[..at],
        None => line,
    }
    .trim();
    let fields: Vec<&str> = clean.split(',').collect();
    if fields.len() < 2 {
        return Err(LineParseError::TooFewFields(fields.len()));
    }

    match fields[0].trim() {
        INNER_CIRCLE_DIAMETER => Ok(Directive::InnerCircleDiameter(number(
            &fields,
            1,
            INNER_CIRCLE_DIAMETER,
        )?)),
        OUTER_CIRCLE_DIAMETER => Ok(Directive::OuterCircleDiameter(number(
            &fields,
            1,
            OUTER_CIRCLE_DIAMETER,
        )?)),
        SECTOR => Ok(Directive::Sector(SlotGroup::new(
            number(&fields, 1, SECTOR)?,
            number(&fields, 2, SECTOR)?,
            number(&fields, 3, SECTOR)?,
            number(&fields, 4, SECTOR)?,
        ))),
        other => Err(LineParseError::UnknownKey(other.to_string())),
    }
}

fn number(fields: &[&str], index: usize, key: &'static str) -> Result<f64, LineParseError> {
    let raw = fields
        .get(index)
        .ok_or(LineParseError::MissingField { key, index })?
        .trim();
    raw.parse::<f64>()
        .map_err(|_| LineParseError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

/// Local accumulator for the fold; never escapes a parse call.
#[derive(Default)]
struct Accumulator {
    inner_circle_radius: f64,
    outer_circle_radius: f64,
    slot_groups: Vec<SlotGroup>,
}

impl Accumulator {
    fn apply(mut self, directive: Directive) -> Self {
        match directive {
            Directive::InnerCircleDiameter(d) => self.inner_circle_radius = d / 2.0,
            Directive::OuterCircleDiameter(d) => self.outer_circle_radius = d / 2.0,
            Directive::Sector(group) => self.slot_groups.push(group),
        }
        self
    }

    fn finish(self) -> Configuration {
        tracing::debug!(
            inner_circle_radius = self.inner_circle_radius,
            outer_circle_radius = self.outer_circle_radius,
            slot_groups = self.slot_groups.len(),
            "parsed blade configuration"
        );
        Configuration::new(
            self.inner_circle_radius,
            self.outer_circle_radius,
            self.slot_groups,
        )
    }
}

fn is_noise(reason: &LineParseError) -> bool {
    matches!(reason, LineParseError::Blank | LineParseError::Comment)
}

/// Parse blade configuration text. Never fails: a line that doesn't make
/// sense is skipped and the rest of the file still counts. Later diameter
/// lines override earlier ones, sector lines accumulate in order.
///
/// ```rust
/// use fan_harp_blade::config::parse;
///
/// let config = parse("inner_circle_diameter,10\n# hello\nsector,5,10,4.5,0.2 // note\n");
/// assert_eq!(config.inner_circle_radius(), 5.0);
/// assert_eq!(config.slot_groups().len(), 1);
/// ```
pub fn parse(text: &str) -> Configuration {
    text.lines()
        .enumerate()
        .map(|(index, line)| {
            parse_line(line).map_err(|reason| {
                if !is_noise(&reason) {
                    tracing::debug!(line = index + 1, %reason, "skipping configuration line");
                }
                reason
            })
        })
        .skip_error()
        .fold(Accumulator::default(), Accumulator::apply)
        .finish()
}

/// Same as [`parse`], but also hands back every line that was dropped for a
/// reason other than being blank or a comment.
pub fn parse_with_diagnostics(text: &str) -> (Configuration, Vec<SkippedLine>) {
    let mut skipped = vec![];
    let mut acc = Accumulator::default();
    for (index, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(directive) => acc = acc.apply(directive),
            Err(reason) if is_noise(&reason) => (),
            Err(reason) => skipped.push(SkippedLine {
                line: index + 1,
                reason,
            }),
        }
    }
    (acc.finish(), skipped)
}
