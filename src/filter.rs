//! Case-insensitive text search over records, with an optional status filter.

use crate::model::{Event, Project, ProjectStatus, TeamMember};

/// Records that expose text fields to the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

/// Secondary exact-match filter; `All` means no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn accepts(&self, status: &S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl StatusFilter<ProjectStatus> {
    /// Cycles through All and the status menu order.
    pub fn cycle(self) -> Self {
        let menu = ProjectStatus::MENU;
        match self {
            Self::All => Self::Only(menu[0]),
            Self::Only(current) => match menu.iter().position(|s| *s == current) {
                Some(i) if i + 1 < menu.len() => Self::Only(menu[i + 1]),
                _ => Self::All,
            },
        }
    }
}

/// Lowercased query, computed once per filter pass.
struct Needle(String);

impl Needle {
    fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    fn matches<'f, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'f str>,
    {
        self.0.is_empty()
            || fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Returns the records where any accessed field contains `query`,
/// ignoring case. An empty query keeps everything. Input order is kept.
pub fn filter_records<'a, R, F, I>(query: &str, records: &'a [R], fields: F) -> Vec<&'a R>
where
    F: Fn(&'a R) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let needle = Needle::new(query);
    records
        .iter()
        .filter(|record| needle.matches(fields(*record)))
        .collect()
}

/// Same as [`filter_records`], intersected with a status predicate.
pub fn filter_with_status<'a, R, S, F, I, G>(
    query: &str,
    records: &'a [R],
    fields: F,
    status: &StatusFilter<S>,
    status_of: G,
) -> Vec<&'a R>
where
    S: PartialEq,
    F: Fn(&'a R) -> I,
    I: IntoIterator<Item = &'a str>,
    G: Fn(&R) -> &S,
{
    let needle = Needle::new(query);
    records
        .iter()
        .filter(|record| status.accepts(status_of(*record)) && needle.matches(fields(*record)))
        .collect()
}

/// Positions in `records` of the records matching `query`, ascending.
pub fn matching_indices<R: Searchable>(query: &str, records: &[R]) -> Vec<usize> {
    let needle = Needle::new(query);
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| needle.matches(r.search_fields()))
        .map(|(i, _)| i)
        .collect()
}

pub fn search<'a, R: Searchable>(query: &str, records: &'a [R]) -> Vec<&'a R> {
    filter_records(query, records, |r: &'a R| r.search_fields())
}
