//! Runtime-configured pipelines over integer sequences.
//!
//! A [`Pipeline`] is a validated list of [`Stage`]s followed by one
//! [`Terminal`] operation. Stages map onto the lazy algebra (`find_all`,
//! `map`) or materialize (`sort`, `save`); the terminal forces the single
//! traversal. Pipelines are parsed from short textual specifications such
//! as `filter:even`, `map:mul:3`, `nth:2`, which is what the command-line
//! front end feeds in.

mod stage;

pub use stage::{Predicate, SortOrder, Stage, Terminal, Transform};

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::enumerable::Enumerable;
use crate::enumerator::Enumerator;
use crate::variants::ArrayEnumerable;

/// Errors raised while building a pipeline from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Blank specification where one was required.
    #[error("empty {0} specification")]
    Empty(&'static str),

    /// Stage name not recognised.
    #[error("unknown stage '{0}'")]
    UnknownStage(String),

    /// Predicate name not recognised.
    #[error("unknown predicate '{0}'")]
    UnknownPredicate(String),

    /// Transform name not recognised.
    #[error("unknown transform '{0}'")]
    UnknownTransform(String),

    /// Sort direction not recognised.
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    UnknownOrder(String),

    /// Terminal operation name not recognised.
    #[error("unknown terminal operation '{0}'")]
    UnknownTerminal(String),

    /// Operation needs an argument and none was given.
    #[error("missing argument for '{0}'")]
    MissingArgument(String),

    /// Operation takes no argument but one was given.
    #[error("'{name}' takes no argument, got '{value}'")]
    UnexpectedArgument {
        /// Operation name.
        name: String,
        /// Offending argument text.
        value: String,
    },

    /// Argument is not a valid integer.
    #[error("invalid integer '{value}' for '{name}'")]
    InvalidInteger {
        /// Operation name.
        name: String,
        /// Offending argument text.
        value: String,
    },
}

/// Result of a pipeline's terminal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Materialized elements.
    Values(Vec<i64>),
    /// Element count.
    Count(usize),
    /// Boolean answer.
    Flag(bool),
    /// Single element, `None` when no such element exists.
    Value(Option<i64>),
    /// Position of a match, `None` when nothing matched.
    Index(Option<usize>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Values(values) => {
                let mut first = true;
                for value in values {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{value}")?;
                    first = false;
                }
                Ok(())
            }
            Outcome::Count(count) => write!(f, "{count}"),
            Outcome::Flag(flag) => write!(f, "{flag}"),
            Outcome::Value(Some(value)) => write!(f, "{value}"),
            Outcome::Index(Some(index)) => write!(f, "{index}"),
            Outcome::Value(None) | Outcome::Index(None) => write!(f, "none"),
        }
    }
}

/// Stages plus a terminal operation, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
    terminal: Terminal,
}

impl Pipeline {
    /// Pipeline with no stages.
    pub fn new(terminal: Terminal) -> Self {
        Self {
            stages: Vec::new(),
            terminal,
        }
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Parse stage specifications and a terminal specification.
    pub fn parse<I, S>(stages: I, terminal: &str) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stages = stages
            .into_iter()
            .map(|text| text.as_ref().parse())
            .collect::<Result<Vec<Stage>, PipelineError>>()?;
        let terminal: Terminal = terminal.parse()?;
        debug!(stages = stages.len(), %terminal, "parsed pipeline");
        Ok(Self { stages, terminal })
    }

    /// Configured stages, in application order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Configured terminal operation.
    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    /// Evaluate against `input`.
    ///
    /// Lazy stages compose without touching `input`; the terminal
    /// operation drives the traversal.
    pub fn run(&self, input: &[i64]) -> Outcome {
        let mut current = Erased::new(ArrayEnumerable::from_slice(input));
        for stage in &self.stages {
            current = match *stage {
                Stage::Filter(predicate) => {
                    Erased::new(current.find_all(move |value: &i64| predicate.test(*value)))
                }
                Stage::Map(transform) => {
                    Erased::new(current.map(move |value: i64| transform.apply(value)))
                }
                Stage::Sort(order) => Erased::new(current.sort(|a, b| order.compare(a, b))),
                Stage::Save => Erased::new(current.save()),
            };
        }
        let outcome = self.terminal.evaluate(&current);
        debug!(input = input.len(), pipeline = %self, "ran pipeline");
        outcome
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in &self.stages {
            write!(f, "{stage} | ")?;
        }
        write!(f, "{}", self.terminal)
    }
}

/// Object-safe view of an integer sequence.
///
/// Carries the cardinality and positional operations alongside the cursor
/// so an erased sequence keeps the overrides of whatever it wraps.
trait ErasedSource {
    fn cursor(&self) -> Box<dyn Enumerator<Item = i64> + '_>;
    fn erased_contains_value(&self, value: &i64) -> bool;
    fn erased_is_empty(&self) -> bool;
    fn erased_len(&self) -> usize;
    fn erased_first(&self) -> Option<i64>;
    fn erased_last(&self) -> Option<i64>;
    fn erased_nth(&self, index: usize) -> Option<i64>;
}

impl<S: Enumerable<Item = i64>> ErasedSource for S {
    fn cursor(&self) -> Box<dyn Enumerator<Item = i64> + '_> {
        Box::new(self.enumerator())
    }

    fn erased_contains_value(&self, value: &i64) -> bool {
        Enumerable::contains_value(self, value)
    }

    fn erased_is_empty(&self) -> bool {
        Enumerable::is_empty(self)
    }

    fn erased_len(&self) -> usize {
        Enumerable::len(self)
    }

    fn erased_first(&self) -> Option<i64> {
        Enumerable::first(self)
    }

    fn erased_last(&self) -> Option<i64> {
        Enumerable::last(self)
    }

    fn erased_nth(&self, index: usize) -> Option<i64> {
        Enumerable::nth(self, index)
    }
}

/// Type-erased sequence, so stages chosen at runtime can be chained.
struct Erased<'a> {
    inner: Box<dyn ErasedSource + 'a>,
}

impl<'a> Erased<'a> {
    fn new<S>(source: S) -> Self
    where
        S: Enumerable<Item = i64> + 'a,
    {
        Self {
            inner: Box::new(source),
        }
    }
}

impl Enumerable for Erased<'_> {
    type Item = i64;
    type Enumerator<'s> = Box<dyn Enumerator<Item = i64> + 's> where Self: 's;

    fn enumerator(&self) -> Self::Enumerator<'_> {
        self.inner.cursor()
    }

    fn contains_value(&self, value: &i64) -> bool {
        self.inner.erased_contains_value(value)
    }

    fn is_empty(&self) -> bool {
        self.inner.erased_is_empty()
    }

    fn len(&self) -> usize {
        self.inner.erased_len()
    }

    fn first(&self) -> Option<i64> {
        self.inner.erased_first()
    }

    fn last(&self) -> Option<i64> {
        self.inner.erased_last()
    }

    fn nth(&self, index: usize) -> Option<i64> {
        self.inner.erased_nth(index)
    }
}
