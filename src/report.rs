//! Ranked rental reports.
//!
//! Rows are assembled by the caller from its client, film and rental records, the functions
//! here only rank and cut them. Each report picks the algorithm that suits its key: merge sort
//! where ties must stay in a predictable order, bingo sort where the key has few distinct
//! values.

use std::fmt;

use tracing::debug;

use crate::{sorted_by, sorted_by_key, Algorithm};

/// Share of [`clients_by_rentals`] kept by [`top_clients`].
pub const REPORT_TOP_CLIENTS_PERCENT: usize = 30;

/// Share of the least rented films kept by [`least_rented_films`].
pub const REPORT_LEAST_RENTED_PERCENT: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RentedFilm {
    pub id: u32,
    pub title: String,
}

impl RentedFilm {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// A client together with the films they rented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientRentals {
    pub id: u32,
    pub name: String,
    films: Vec<RentedFilm>,
    rentals: usize,
}

impl ClientRentals {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            films: Vec::new(),
            rentals: 0,
        }
    }

    /// Records one rental of `film`. Renting the same film again counts as another rental but
    /// does not list the film twice.
    pub fn add_film(&mut self, film: RentedFilm) {
        if !self.films.iter().any(|f| f.id == film.id) {
            self.films.push(film);
        }

        self.rentals += 1;
    }

    pub fn films(&self) -> &[RentedFilm] {
        &self.films
    }

    pub fn rentals(&self) -> usize {
        self.rentals
    }
}

impl fmt::Display for ClientRentals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Id: {}, Name: {} - {}", self.id, self.name, self.rentals)?;
        for film in &self.films {
            writeln!(f, "\tId: {}, Title: {}", film.id, film.title)?;
        }

        Ok(())
    }
}

/// A film together with how often it was rented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilmRentals {
    pub id: u32,
    pub title: String,
    rentals: usize,
}

impl FilmRentals {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            rentals: 0,
        }
    }

    pub fn inc_rentals(&mut self) {
        self.rentals += 1;
    }

    pub fn rentals(&self) -> usize {
        self.rentals
    }
}

impl fmt::Display for FilmRentals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Id: {}, Title: {} - {}", self.id, self.title, self.rentals)
    }
}

/// Clients in alphabetical order.
pub fn clients_by_name(clients: &[ClientRentals]) -> Vec<ClientRentals> {
    let report = sorted_by(clients, |a, b| a.name < b.name, Algorithm::MergeSort);
    debug!(rows = report.len(), "clients by name");

    report
}

/// Clients with the most rentals first, equal counts in reverse alphabetical order.
///
/// The key combines count and name, so no two clients with different names compare equal and
/// the unstable algorithm is safe to use.
pub fn clients_by_rentals(clients: &[ClientRentals]) -> Vec<ClientRentals> {
    let report = sorted_by(
        clients,
        |a, b| (b.rentals, &b.name) < (a.rentals, &a.name),
        Algorithm::BingoSort,
    );
    debug!(rows = report.len(), "clients by rentals");

    report
}

/// The first [`REPORT_TOP_CLIENTS_PERCENT`] percent of [`clients_by_rentals`], rounded up.
pub fn top_clients(clients: &[ClientRentals]) -> Vec<ClientRentals> {
    let mut report = clients_by_rentals(clients);
    report.truncate(percent_ceil(report.len(), REPORT_TOP_CLIENTS_PERCENT));
    debug!(rows = report.len(), "top clients");

    report
}

/// Films with the most rentals first, equally rented films in input order.
pub fn films_by_rentals(films: &[FilmRentals]) -> Vec<FilmRentals> {
    let report = sorted_by_key(films, |f| f.rentals, true, Algorithm::MergeSort);
    debug!(rows = report.len(), "films by rentals");

    report
}

/// The least rented [`REPORT_LEAST_RENTED_PERCENT`] percent (rounded up) of the films whose
/// title starts with `prefix`, in alphabetical order.
pub fn least_rented_films(films: &[FilmRentals], prefix: &str) -> Vec<FilmRentals> {
    let matching = films
        .iter()
        .filter(|f| f.title.starts_with(prefix))
        .cloned()
        .collect::<Vec<_>>();

    // Rental counts repeat a lot, which is what bingo sort is good at.
    let mut least_rented = sorted_by_key(&matching, |f| f.rentals, false, Algorithm::BingoSort);
    least_rented.truncate(percent_ceil(least_rented.len(), REPORT_LEAST_RENTED_PERCENT));

    let report = sorted_by(&least_rented, |a, b| a.title < b.title, Algorithm::MergeSort);
    debug!(prefix, matching = matching.len(), rows = report.len(), "least rented films");

    report
}

fn percent_ceil(len: usize, percent: usize) -> usize {
    (len * percent + 99) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: u32, name: &str, film_ids: &[u32]) -> ClientRentals {
        let mut row = ClientRentals::new(id, name);
        for film_id in film_ids {
            row.add_film(RentedFilm::new(*film_id, format!("Film {film_id}")));
        }

        row
    }

    fn film(id: u32, title: &str, rentals: usize) -> FilmRentals {
        let mut row = FilmRentals::new(id, title);
        for _ in 0..rentals {
            row.inc_rentals();
        }

        row
    }

    fn ids<'a>(rows: impl IntoIterator<Item = &'a u32>) -> Vec<u32> {
        rows.into_iter().copied().collect()
    }

    fn clients() -> Vec<ClientRentals> {
        vec![
            client(1, "Mara", &[1, 2]),
            client(2, "Andrei", &[3]),
            client(3, "Zoe", &[1, 2, 3]),
            client(4, "Bogdan", &[]),
            client(5, "Cezar", &[4, 5]),
        ]
    }

    fn films() -> Vec<FilmRentals> {
        vec![
            film(1, "The Matrix", 4),
            film(2, "Alien", 1),
            film(3, "The Thing", 1),
            film(4, "Heat", 4),
            film(5, "The Fly", 0),
            film(6, "The Birds", 2),
        ]
    }

    #[test]
    fn add_film_counts_repeats_once() {
        let mut row = ClientRentals::new(1, "Mara");
        row.add_film(RentedFilm::new(7, "Heat"));
        row.add_film(RentedFilm::new(7, "Heat"));
        row.add_film(RentedFilm::new(8, "Alien"));

        assert_eq!(row.rentals(), 3);
        assert_eq!(row.films().len(), 2);
    }

    #[test]
    fn display() {
        let mut row = ClientRentals::new(1, "Mara");
        row.add_film(RentedFilm::new(7, "Heat"));

        assert_eq!(row.to_string(), "Id: 1, Name: Mara - 1\n\tId: 7, Title: Heat\n");
        assert_eq!(film(2, "Alien", 3).to_string(), "Id: 2, Title: Alien - 3\n");
    }

    #[test]
    fn by_name() {
        let report = clients_by_name(&clients());

        assert_eq!(ids(report.iter().map(|c| &c.id)), [2, 4, 5, 1, 3]);
    }

    #[test]
    fn by_rentals() {
        let report = clients_by_rentals(&clients());

        // Mara and Cezar both rented two films, Mara sorts after Cezar so comes first.
        assert_eq!(ids(report.iter().map(|c| &c.id)), [3, 1, 5, 2, 4]);
    }

    #[test]
    fn top_thirty_percent_rounds_up() {
        // 30% of 5 is 1.5, rounded up to 2.
        assert_eq!(ids(top_clients(&clients()).iter().map(|c| &c.id)), [3, 1]);
        assert_eq!(top_clients(&clients()[..1]).len(), 1);
        assert!(top_clients(&[]).is_empty());
    }

    #[test]
    fn films_most_rented_first_ties_in_input_order() {
        let report = films_by_rentals(&films());

        assert_eq!(ids(report.iter().map(|f| &f.id)), [1, 4, 6, 2, 3, 5]);
    }

    #[test]
    fn least_rented_with_prefix() {
        // "The" films by rentals: Fly 0, Thing 1, Birds 2, Matrix 4. Half of them, by title.
        let report = least_rented_films(&films(), "The");

        assert_eq!(
            report.iter().map(|f| f.title.as_str()).collect::<Vec<_>>(),
            ["The Fly", "The Thing"]
        );
    }

    #[test]
    fn least_rented_no_match() {
        assert!(least_rented_films(&films(), "Zzz").is_empty());
    }

    #[test]
    fn percent_rounding() {
        assert_eq!(percent_ceil(0, 30), 0);
        assert_eq!(percent_ceil(1, 30), 1);
        assert_eq!(percent_ceil(10, 30), 3);
        assert_eq!(percent_ceil(11, 30), 4);
        assert_eq!(percent_ceil(3, 50), 2);
    }
}
