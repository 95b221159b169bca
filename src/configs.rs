//! Four-point measurement configurations and standard spread generators.
//!
//! A [`Configuration`] stores four 1-indexed electrode identifiers in the order
//! current A, current B, receiver M, receiver N.

use std::fmt;

/// Errors raised when building configurations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Electrode identifiers are 1-indexed; zero is not a valid identifier.
    #[error("electrode identifier at slot {slot} is 0; identifiers are 1-indexed")]
    ZeroElectrode {
        /// Slot (0..4) holding the zero.
        slot: usize,
    },
    /// The electrode layout cannot hold a single spread of the requested type.
    #[error("{layout} needs at least {required} electrodes, got {available}")]
    TooFewElectrodes {
        /// Spread family being generated.
        layout: &'static str,
        /// Minimum electrode count.
        required: usize,
        /// Electrode count supplied.
        available: usize,
    },
}

/// Convention for resolving receiver electrodes through the grid.
///
/// Current electrodes are always resolved as given. [`ReceiverIndexing::Shifted`] is how
/// `voltages_from_potentials` reads receivers; [`ReceiverIndexing::AsGiven`] resolves them
/// with the same keys as the current electrodes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceiverIndexing {
    /// Resolve `M - 1` and `N - 1`.
    Shifted,
    /// Resolve `M` and `N`.
    AsGiven,
}

/// One four-point spread `(A, B, M, N)` of 1-indexed electrode identifiers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[usize; 4]", into = "[usize; 4]"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration([usize; 4]);

impl Configuration {
    /// Creates a configuration, rejecting zero identifiers.
    pub fn new(a: usize, b: usize, m: usize, n: usize) -> Result<Self, ConfigError> {
        Self::try_from([a, b, m, n])
    }

    /// Current electrode A.
    #[must_use]
    pub const fn a(&self) -> usize {
        self.0[0]
    }

    /// Current electrode B.
    #[must_use]
    pub const fn b(&self) -> usize {
        self.0[1]
    }

    /// Receiver electrode M.
    #[must_use]
    pub const fn m(&self) -> usize {
        self.0[2]
    }

    /// Receiver electrode N.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.0[3]
    }

    /// All four identifiers, as given.
    #[must_use]
    pub const fn electrodes(&self) -> [usize; 4] {
        self.0
    }

    /// Current dipole `(A, B)` exactly as given, without any index shift.
    ///
    /// This is the form passed to the grid resolver when superposing source potentials.
    #[must_use]
    pub const fn current_electrodes(&self) -> (usize, usize) {
        (self.0[0], self.0[1])
    }

    /// Receiver dipole `(M, N)` exactly as given.
    #[must_use]
    pub const fn receivers(&self) -> (usize, usize) {
        (self.0[2], self.0[3])
    }

    /// Keys handed to the grid resolver for the receiver dipole under `indexing`.
    #[must_use]
    pub fn receiver_keys(&self, indexing: ReceiverIndexing) -> (usize, usize) {
        match indexing {
            ReceiverIndexing::Shifted => {
                let [_, _, m, n] = self.zero_indexed();
                (m, n)
            }
            ReceiverIndexing::AsGiven => self.receivers(),
        }
    }

    /// All four identifiers shifted down by one.
    ///
    /// This is the form passed to the grid resolver when reading receiver potentials.
    /// Never underflows since construction rejects zero identifiers.
    #[must_use]
    pub fn zero_indexed(&self) -> [usize; 4] {
        self.0.map(|e| e - 1)
    }
}

impl TryFrom<[usize; 4]> for Configuration {
    type Error = ConfigError;

    fn try_from(electrodes: [usize; 4]) -> Result<Self, Self::Error> {
        match electrodes.iter().position(|&e| e == 0) {
            Some(slot) => Err(ConfigError::ZeroElectrode { slot }),
            None => Ok(Self(electrodes)),
        }
    }
}

impl From<Configuration> for [usize; 4] {
    fn from(config: Configuration) -> Self {
        config.0
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, m, n] = self.0;
        write!(f, "{a} {b} {m} {n}")
    }
}

/// Builds a batch from raw `N×4` rows.
pub fn from_rows<I>(rows: I) -> Result<Vec<Configuration>, ConfigError>
where
    I: IntoIterator<Item = [usize; 4]>,
{
    rows.into_iter().map(Configuration::try_from).collect()
}

/// Dipole-dipole spreads on a line of `electrodes` electrodes.
///
/// Current dipoles `(a, a + skip + 1)` walk along the line; for each, up to `levels`
/// receiver dipoles of the same length follow the current dipole, one electrode further
/// away per level. Spreads that would run past the last electrode are not emitted.
pub fn dipole_dipole(
    electrodes: usize,
    skip: usize,
    levels: usize,
) -> Result<Vec<Configuration>, ConfigError> {
    let too_few = |required| ConfigError::TooFewElectrodes {
        layout: "dipole-dipole",
        required,
        available: electrodes,
    };
    let width = skip.checked_add(1).ok_or_else(|| too_few(usize::MAX))?;
    let required = width
        .checked_mul(2)
        .and_then(|w| w.checked_add(2))
        .ok_or_else(|| too_few(usize::MAX))?;
    if electrodes < required {
        return Err(too_few(required));
    }

    let mut configs = Vec::new();
    for a in 1..=electrodes + 1 - required {
        let b = a + width;
        for level in 0..levels {
            let m = b + 1 + level;
            let n = m + width;
            if n > electrodes {
                break;
            }
            configs.push(Configuration([a, b, m, n]));
        }
    }
    Ok(configs)
}

/// Wenner-alpha spreads `(i, i + 3s, i + s, i + 2s)` for every spacing `s` that fits.
pub fn wenner(electrodes: usize) -> Result<Vec<Configuration>, ConfigError> {
    if electrodes < 4 {
        return Err(ConfigError::TooFewElectrodes {
            layout: "wenner",
            required: 4,
            available: electrodes,
        });
    }

    let mut configs = Vec::new();
    for spacing in 1.. {
        if 1 + 3 * spacing > electrodes {
            break;
        }
        for a in 1..=electrodes - 3 * spacing {
            configs.push(Configuration([a, a + 3 * spacing, a + spacing, a + 2 * spacing]));
        }
    }
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn zero_identifier_is_rejected() {
        assert_eq!(
            Configuration::new(1, 2, 0, 4),
            Err(ConfigError::ZeroElectrode { slot: 2 })
        );
    }

    #[test]
    fn zero_indexed_shifts_every_slot() {
        let c = Configuration::new(1, 2, 4, 3).unwrap();
        assert_eq!(c.current_electrodes(), (1, 2));
        assert_eq!(c.zero_indexed(), [0, 1, 3, 2]);
        assert_eq!(c.to_string(), "1 2 4 3");
        assert_eq!(c.receiver_keys(ReceiverIndexing::Shifted), (3, 2));
        assert_eq!(c.receiver_keys(ReceiverIndexing::AsGiven), (4, 3));
    }

    #[test]
    fn rows_fail_on_first_invalid_entry() {
        let err = from_rows([[1, 2, 3, 4], [0, 1, 2, 3]]).unwrap_err();
        assert_eq!(err, ConfigError::ZeroElectrode { slot: 0 });
        assert_eq!(from_rows([[1, 2, 3, 4]]).unwrap().len(), 1);
    }

    #[test]
    fn dipole_dipole_on_six_electrodes() {
        let configs = dipole_dipole(6, 0, 3).unwrap();
        let rows: Vec<[usize; 4]> = configs.into_iter().map(Into::into).collect();
        assert_eq!(
            rows,
            vec![
                [1, 2, 3, 4],
                [1, 2, 4, 5],
                [1, 2, 5, 6],
                [2, 3, 4, 5],
                [2, 3, 5, 6],
                [3, 4, 5, 6],
            ]
        );
    }

    #[test]
    fn wenner_on_seven_electrodes() {
        let rows: Vec<[usize; 4]> = wenner(7).unwrap().into_iter().map(Into::into).collect();
        assert_eq!(rows.len(), 4 + 1);
        assert_eq!(rows[0], [1, 4, 2, 3]);
        assert_eq!(rows[3], [4, 7, 5, 6]);
        assert_eq!(rows[4], [1, 7, 3, 5]);
    }

    #[rstest]
    #[case::dipole_dipole(dipole_dipole(3, 0, 1), "dipole-dipole", 4)]
    #[case::wide_dipole_dipole(dipole_dipole(5, 1, 1), "dipole-dipole", 6)]
    #[case::width_overflows(dipole_dipole(10, usize::MAX, 1), "dipole-dipole", usize::MAX)]
    #[case::span_overflows(dipole_dipole(10, usize::MAX / 2, 1), "dipole-dipole", usize::MAX)]
    #[case::wenner(wenner(3), "wenner", 4)]
    fn too_few_electrodes(
        #[case] result: Result<Vec<Configuration>, ConfigError>,
        #[case] layout: &'static str,
        #[case] required: usize,
    ) {
        match result {
            Err(ConfigError::TooFewElectrodes { layout: l, required: r, .. }) => {
                assert_eq!(l, layout);
                assert_eq!(r, required);
            }
            other => panic!("expected TooFewElectrodes, got {other:?}"),
        }
    }
}
