use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::enumerable::Enumerable;
use crate::pipeline::{Outcome, PipelineError};

/// Integer predicate used by `filter:` stages and predicate terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Divisible by two.
    Even,
    /// Not divisible by two.
    Odd,
    /// Strictly greater than zero.
    Positive,
    /// Strictly less than zero.
    Negative,
    /// Strictly greater than the argument.
    GreaterThan(i64),
    /// Strictly less than the argument.
    LessThan(i64),
    /// Equal to the argument.
    Equal(i64),
}

impl Predicate {
    /// Whether `value` is accepted.
    pub fn test(&self, value: i64) -> bool {
        match *self {
            Predicate::Even => value % 2 == 0,
            Predicate::Odd => value % 2 != 0,
            Predicate::Positive => value > 0,
            Predicate::Negative => value < 0,
            Predicate::GreaterThan(bound) => value > bound,
            Predicate::LessThan(bound) => value < bound,
            Predicate::Equal(target) => value == target,
        }
    }
}

impl FromStr for Predicate {
    type Err = PipelineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (name, arg) = split_head(text);
        match name {
            "even" => no_argument(name, arg, Predicate::Even),
            "odd" => no_argument(name, arg, Predicate::Odd),
            "positive" => no_argument(name, arg, Predicate::Positive),
            "negative" => no_argument(name, arg, Predicate::Negative),
            "gt" => parse_int(name, arg).map(Predicate::GreaterThan),
            "lt" => parse_int(name, arg).map(Predicate::LessThan),
            "eq" => parse_int(name, arg).map(Predicate::Equal),
            "" => Err(PipelineError::Empty("predicate")),
            other => Err(PipelineError::UnknownPredicate(other.to_string())),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Even => write!(f, "even"),
            Predicate::Odd => write!(f, "odd"),
            Predicate::Positive => write!(f, "positive"),
            Predicate::Negative => write!(f, "negative"),
            Predicate::GreaterThan(bound) => write!(f, "gt:{bound}"),
            Predicate::LessThan(bound) => write!(f, "lt:{bound}"),
            Predicate::Equal(target) => write!(f, "eq:{target}"),
        }
    }
}

/// Element transform used by `map:` stages. Arithmetic wraps on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Add the argument.
    Add(i64),
    /// Subtract the argument.
    Sub(i64),
    /// Multiply by the argument.
    Mul(i64),
    /// Negate.
    Neg,
    /// Absolute value.
    Abs,
    /// Multiply by itself.
    Square,
}

impl Transform {
    /// Transform `value`.
    pub fn apply(&self, value: i64) -> i64 {
        match *self {
            Transform::Add(n) => value.wrapping_add(n),
            Transform::Sub(n) => value.wrapping_sub(n),
            Transform::Mul(n) => value.wrapping_mul(n),
            Transform::Neg => value.wrapping_neg(),
            Transform::Abs => value.wrapping_abs(),
            Transform::Square => value.wrapping_mul(value),
        }
    }
}

impl FromStr for Transform {
    type Err = PipelineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (name, arg) = split_head(text);
        match name {
            "add" => parse_int(name, arg).map(Transform::Add),
            "sub" => parse_int(name, arg).map(Transform::Sub),
            "mul" => parse_int(name, arg).map(Transform::Mul),
            "neg" => no_argument(name, arg, Transform::Neg),
            "abs" => no_argument(name, arg, Transform::Abs),
            "square" => no_argument(name, arg, Transform::Square),
            "" => Err(PipelineError::Empty("transform")),
            other => Err(PipelineError::UnknownTransform(other.to_string())),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Add(n) => write!(f, "add:{n}"),
            Transform::Sub(n) => write!(f, "sub:{n}"),
            Transform::Mul(n) => write!(f, "mul:{n}"),
            Transform::Neg => write!(f, "neg"),
            Transform::Abs => write!(f, "abs"),
            Transform::Square => write!(f, "square"),
        }
    }
}

/// Direction of a `sort:` stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Comparator for this direction.
    pub fn compare(&self, a: &i64, b: &i64) -> Ordering {
        match self {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        }
    }
}

impl FromStr for SortOrder {
    type Err = PipelineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            "" => Err(PipelineError::Empty("sort order")),
            other => Err(PipelineError::UnknownOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// One lazy or materializing step of a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `filter:<predicate>`: lazy `find_all`.
    Filter(Predicate),
    /// `map:<transform>`: lazy `map`.
    Map(Transform),
    /// `sort:asc|desc`: eager stable sort.
    Sort(SortOrder),
    /// `save`: materialize once.
    Save,
}

impl FromStr for Stage {
    type Err = PipelineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (name, arg) = split_head(text);
        match name {
            "filter" => require(name, arg)?.parse().map(Stage::Filter),
            "map" => require(name, arg)?.parse().map(Stage::Map),
            "sort" => require(name, arg)?.parse().map(Stage::Sort),
            "save" => no_argument(name, arg, Stage::Save),
            "" => Err(PipelineError::Empty("stage")),
            other => Err(PipelineError::UnknownStage(other.to_string())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Filter(predicate) => write!(f, "filter:{predicate}"),
            Stage::Map(transform) => write!(f, "map:{transform}"),
            Stage::Sort(order) => write!(f, "sort:{order}"),
            Stage::Save => write!(f, "save"),
        }
    }
}

/// Terminal operation closing a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// `to-vec`
    ToVec,
    /// `len`
    Len,
    /// `is-empty`
    IsEmpty,
    /// `first`
    First,
    /// `last`
    Last,
    /// `nth:<index>`
    Nth(usize),
    /// `first-or:<default>`
    FirstOr(i64),
    /// `last-or:<default>`
    LastOr(i64),
    /// `nth-or:<index>:<default>`
    NthOr(usize, i64),
    /// `max`
    Max,
    /// `min`
    Min,
    /// `index-of:<predicate>`
    IndexOf(Predicate),
    /// `find:<predicate>`
    Find(Predicate),
    /// `contains:<predicate>`
    Contains(Predicate),
    /// `contains-value:<value>`
    ContainsValue(i64),
    /// `all:<predicate>`
    All(Predicate),
}

impl Terminal {
    /// Run this terminal operation against `source`.
    pub fn evaluate<S>(&self, source: &S) -> Outcome
    where
        S: Enumerable<Item = i64>,
    {
        match *self {
            Terminal::ToVec => Outcome::Values(source.to_vec()),
            Terminal::Len => Outcome::Count(source.len()),
            Terminal::IsEmpty => Outcome::Flag(source.is_empty()),
            Terminal::First => Outcome::Value(source.first()),
            Terminal::Last => Outcome::Value(source.last()),
            Terminal::Nth(index) => Outcome::Value(source.nth(index)),
            Terminal::FirstOr(default) => Outcome::Value(Some(source.first_or_default(default))),
            Terminal::LastOr(default) => Outcome::Value(Some(source.last_or_default(default))),
            Terminal::NthOr(index, default) => {
                Outcome::Value(Some(source.nth_or_default(index, default)))
            }
            Terminal::Max => Outcome::Value(source.max(|a, b| a.cmp(b))),
            Terminal::Min => Outcome::Value(source.min(|a, b| a.cmp(b))),
            Terminal::IndexOf(predicate) => {
                Outcome::Index(source.index_of(|value| predicate.test(*value)))
            }
            Terminal::Find(predicate) => Outcome::Value(source.find(|value| predicate.test(*value))),
            Terminal::Contains(predicate) => {
                Outcome::Flag(source.contains(|value| predicate.test(*value)))
            }
            Terminal::ContainsValue(target) => Outcome::Flag(source.contains_value(&target)),
            Terminal::All(predicate) => Outcome::Flag(source.all_pass(|value| predicate.test(*value))),
        }
    }
}

impl FromStr for Terminal {
    type Err = PipelineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (name, arg) = split_head(text);
        match name {
            "to-vec" => no_argument(name, arg, Terminal::ToVec),
            "len" => no_argument(name, arg, Terminal::Len),
            "is-empty" => no_argument(name, arg, Terminal::IsEmpty),
            "first" => no_argument(name, arg, Terminal::First),
            "last" => no_argument(name, arg, Terminal::Last),
            "max" => no_argument(name, arg, Terminal::Max),
            "min" => no_argument(name, arg, Terminal::Min),
            "nth" => parse_index(name, require(name, arg)?).map(Terminal::Nth),
            "first-or" => parse_int(name, arg).map(Terminal::FirstOr),
            "last-or" => parse_int(name, arg).map(Terminal::LastOr),
            "nth-or" => {
                let (index, default) = split_head(require(name, arg)?);
                let index = parse_index(name, index)?;
                let default = parse_int(name, default)?;
                Ok(Terminal::NthOr(index, default))
            }
            "index-of" => require(name, arg)?.parse().map(Terminal::IndexOf),
            "find" => require(name, arg)?.parse().map(Terminal::Find),
            "contains" => require(name, arg)?.parse().map(Terminal::Contains),
            "contains-value" => parse_int(name, arg).map(Terminal::ContainsValue),
            "all" => require(name, arg)?.parse().map(Terminal::All),
            "" => Err(PipelineError::Empty("terminal")),
            other => Err(PipelineError::UnknownTerminal(other.to_string())),
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::ToVec => write!(f, "to-vec"),
            Terminal::Len => write!(f, "len"),
            Terminal::IsEmpty => write!(f, "is-empty"),
            Terminal::First => write!(f, "first"),
            Terminal::Last => write!(f, "last"),
            Terminal::Nth(index) => write!(f, "nth:{index}"),
            Terminal::FirstOr(default) => write!(f, "first-or:{default}"),
            Terminal::LastOr(default) => write!(f, "last-or:{default}"),
            Terminal::NthOr(index, default) => write!(f, "nth-or:{index}:{default}"),
            Terminal::Max => write!(f, "max"),
            Terminal::Min => write!(f, "min"),
            Terminal::IndexOf(predicate) => write!(f, "index-of:{predicate}"),
            Terminal::Find(predicate) => write!(f, "find:{predicate}"),
            Terminal::Contains(predicate) => write!(f, "contains:{predicate}"),
            Terminal::ContainsValue(target) => write!(f, "contains-value:{target}"),
            Terminal::All(predicate) => write!(f, "all:{predicate}"),
        }
    }
}

/// Split `name:rest` at the first colon.
fn split_head(text: &str) -> (&str, Option<&str>) {
    match text.split_once(':') {
        Some((name, rest)) => (name, Some(rest)),
        None => (text, None),
    }
}

fn require<'t>(name: &str, arg: Option<&'t str>) -> Result<&'t str, PipelineError> {
    match arg {
        Some(arg) if !arg.is_empty() => Ok(arg),
        _ => Err(PipelineError::MissingArgument(name.to_string())),
    }
}

fn no_argument<T>(name: &str, arg: Option<&str>, value: T) -> Result<T, PipelineError> {
    match arg {
        None => Ok(value),
        Some(extra) => Err(PipelineError::UnexpectedArgument {
            name: name.to_string(),
            value: extra.to_string(),
        }),
    }
}

fn parse_int(name: &str, arg: Option<&str>) -> Result<i64, PipelineError> {
    let arg = require(name, arg)?;
    arg.parse().map_err(|_| PipelineError::InvalidInteger {
        name: name.to_string(),
        value: arg.to_string(),
    })
}

fn parse_index(name: &str, arg: &str) -> Result<usize, PipelineError> {
    arg.parse().map_err(|_| PipelineError::InvalidInteger {
        name: name.to_string(),
        value: arg.to_string(),
    })
}
