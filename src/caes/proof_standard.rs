use super::CaesError;
use crate::utils::LabelType;
use anyhow::Result;
use std::collections::HashMap;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The five Carneades proof standards, from weakest to strongest.
///
/// A proof standard decides whether a literal holds given the weights of the
/// applicable arguments pro and con it.
/// All standards are monotone in the strongest pro weight and anti-monotone in
/// the strongest con weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ProofStandard {
    /// At least one applicable pro argument exists.
    Scintilla,
    /// Scintilla, and the strongest pro argument strictly outweighs the strongest con one.
    Preponderance,
    /// Preponderance, and the pro/con margin exceeds beta while the strongest pro
    /// argument exceeds alpha.
    ClearAndConvincing,
    /// Clear and convincing, and the strongest con argument stays below gamma.
    BeyondReasonableDoubt,
    /// At least one applicable pro argument and no applicable con argument at all.
    DialecticalValidity,
}

impl ProofStandard {
    /// Decides whether the applicable pro and con argument weights meet this standard.
    ///
    /// Both slices must already be filtered to the applicable arguments concluding
    /// the literal under evaluation and its negation, respectively.
    /// The strongest weight of an empty slice counts as zero.
    /// All inequalities are strict: equal strongest pro and con weights fail
    /// preponderance, and a weight equal to alpha or gamma fails the respective
    /// threshold.
    pub fn satisfied_by(self, pro: &[f64], con: &[f64], params: &Parameters) -> bool {
        let max_weight = |weights: &[f64]| weights.iter().fold(0.0f64, |m, w| m.max(*w));
        let max_pro = max_weight(pro);
        let max_con = max_weight(con);
        match self {
            ProofStandard::Scintilla => !pro.is_empty(),
            ProofStandard::Preponderance => !pro.is_empty() && max_pro > max_con,
            ProofStandard::ClearAndConvincing => {
                ProofStandard::Preponderance.satisfied_by(pro, con, params)
                    && max_pro - max_con > params.beta
                    && max_pro > params.alpha
            }
            ProofStandard::BeyondReasonableDoubt => {
                ProofStandard::ClearAndConvincing.satisfied_by(pro, con, params)
                    && max_con < params.gamma
            }
            ProofStandard::DialecticalValidity => !pro.is_empty() && con.is_empty(),
        }
    }
}

/// The threshold parameters used by the clear-and-convincing and
/// beyond-reasonable-doubt standards.
///
/// Alpha is the strength a pro argument must exceed, beta the margin required
/// between the strongest pro and con arguments, and gamma the strength con
/// arguments must stay below for a reasonable doubt to be excluded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl Parameters {
    /// Builds a parameter triple, checking each value lies in the unit interval.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        let check = |name: &'static str, value: f64| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(CaesError::ParameterOutOfRange { name, value })
            }
        };
        check("alpha", alpha)?;
        check("beta", beta)?;
        check("gamma", gamma)?;
        Ok(Parameters { alpha, beta, gamma })
    }

    /// Returns the alpha threshold.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the beta margin.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the gamma threshold.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            alpha: 0.4,
            beta: 0.3,
            gamma: 0.2,
        }
    }
}

/// The proof standard assigned to each proposition.
///
/// Propositions without an explicit assignment default to
/// [`ProofStandard::Scintilla`].
/// The assignment is keyed by proposition, so a literal and its negation are
/// always evaluated under the same standard.
pub struct StandardAssignment<T>
where
    T: LabelType,
{
    config: HashMap<T, ProofStandard>,
}

impl<T> Default for StandardAssignment<T>
where
    T: LabelType,
{
    fn default() -> Self {
        StandardAssignment {
            config: HashMap::new(),
        }
    }
}

impl<T> StandardAssignment<T>
where
    T: LabelType,
{
    /// Assigns a proof standard to a proposition, replacing any previous assignment.
    pub fn set(&mut self, label: T, standard: ProofStandard) -> Option<ProofStandard> {
        self.config.insert(label, standard)
    }

    /// Returns the proof standard assigned to a proposition.
    pub fn get(&self, label: &T) -> ProofStandard {
        self.config
            .get(label)
            .copied()
            .unwrap_or(ProofStandard::Scintilla)
    }

    /// Returns an iterator to the explicit assignments.
    pub fn iter(&self) -> impl Iterator<Item = (&T, ProofStandard)> + '_ {
        self.config.iter().map(|(label, standard)| (label, *standard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_standard_names() {
        assert_eq!("scintilla", ProofStandard::Scintilla.as_ref());
        assert_eq!(
            "beyond_reasonable_doubt",
            ProofStandard::BeyondReasonableDoubt.as_ref()
        );
        assert_eq!(
            ProofStandard::ClearAndConvincing,
            ProofStandard::from_str("clear_and_convincing").unwrap()
        );
        assert!(ProofStandard::from_str("balance_of_probabilities").is_err());
    }

    #[test]
    fn test_scintilla() {
        let params = Parameters::default();
        assert!(!ProofStandard::Scintilla.satisfied_by(&[], &[], &params));
        assert!(ProofStandard::Scintilla.satisfied_by(&[0.0], &[], &params));
        assert!(ProofStandard::Scintilla.satisfied_by(&[0.1], &[0.9], &params));
    }

    #[test]
    fn test_preponderance_requires_strict_inequality() {
        let params = Parameters::default();
        assert!(ProofStandard::Preponderance.satisfied_by(&[0.5], &[0.2], &params));
        assert!(!ProofStandard::Preponderance.satisfied_by(&[0.5], &[0.5], &params));
        assert!(!ProofStandard::Preponderance.satisfied_by(&[0.2], &[0.5], &params));
        assert!(!ProofStandard::Preponderance.satisfied_by(&[], &[], &params));
        assert!(!ProofStandard::Preponderance.satisfied_by(&[0.0], &[], &params));
    }

    #[test]
    fn test_clear_and_convincing() {
        let params = Parameters::new(0.4, 0.3, 0.2).unwrap();
        assert!(ProofStandard::ClearAndConvincing.satisfied_by(&[0.8], &[0.1], &params));
        // margin not above beta
        assert!(!ProofStandard::ClearAndConvincing.satisfied_by(&[0.8], &[0.5], &params));
        // strongest pro not above alpha
        assert!(!ProofStandard::ClearAndConvincing.satisfied_by(&[0.35], &[], &params));
    }

    #[test]
    fn test_beyond_reasonable_doubt() {
        let params = Parameters::new(0.4, 0.3, 0.2).unwrap();
        assert!(ProofStandard::BeyondReasonableDoubt.satisfied_by(&[0.8], &[0.1], &params));
        assert!(!ProofStandard::BeyondReasonableDoubt.satisfied_by(&[0.8], &[0.3], &params));
    }

    #[test]
    fn test_boundary_weights_fail_strict_thresholds() {
        let params = Parameters::new(0.4, 0.3, 0.2).unwrap();
        // strongest pro weight exactly alpha
        assert!(!ProofStandard::ClearAndConvincing.satisfied_by(&[0.4], &[], &params));
        // strongest con weight exactly gamma
        assert!(!ProofStandard::BeyondReasonableDoubt.satisfied_by(&[0.9], &[0.2], &params));
        assert!(ProofStandard::BeyondReasonableDoubt.satisfied_by(&[0.9], &[0.19], &params));
    }

    #[test]
    fn test_dialectical_validity() {
        let params = Parameters::default();
        assert!(ProofStandard::DialecticalValidity.satisfied_by(&[0.1], &[], &params));
        assert!(!ProofStandard::DialecticalValidity.satisfied_by(&[0.9], &[0.0], &params));
        assert!(!ProofStandard::DialecticalValidity.satisfied_by(&[], &[], &params));
    }

    #[test]
    fn test_standard_ordering() {
        // with permissive thresholds, each standard accepting implies all weaker ones accept
        let params = Parameters::new(0.0, 0.0, 1.0).unwrap();
        let chain = [
            ProofStandard::Scintilla,
            ProofStandard::Preponderance,
            ProofStandard::ClearAndConvincing,
            ProofStandard::BeyondReasonableDoubt,
        ];
        let weight_sets: Vec<Vec<f64>> = vec![vec![], vec![0.2], vec![0.5, 0.2], vec![0.9]];
        for pro in &weight_sets {
            for con in &weight_sets {
                for window in chain.windows(2) {
                    let weaker = window[0].satisfied_by(pro, con, &params);
                    let stronger = window[1].satisfied_by(pro, con, &params);
                    assert!(
                        !stronger || weaker,
                        "{:?} accepted but {:?} rejected for pro {:?} con {:?}",
                        window[1],
                        window[0],
                        pro,
                        con
                    );
                }
                if ProofStandard::DialecticalValidity.satisfied_by(pro, con, &params) {
                    assert!(ProofStandard::BeyondReasonableDoubt.satisfied_by(pro, con, &params));
                }
            }
        }
    }

    #[test]
    fn test_monotonicity_in_strongest_pro() {
        let params = Parameters::default();
        for standard in ProofStandard::iter() {
            let pro = vec![0.6];
            let con = vec![0.1];
            if standard.satisfied_by(&pro, &con, &params) {
                let reinforced = vec![0.6, 0.8];
                assert!(
                    standard.satisfied_by(&reinforced, &con, &params),
                    "{:?} lost by adding a stronger pro argument",
                    standard
                );
            }
        }
    }

    #[test]
    fn test_parameters_out_of_range() {
        assert!(Parameters::new(0.4, 0.3, 0.2).is_ok());
        let err = Parameters::new(1.4, 0.3, 0.2).unwrap_err().downcast::<CaesError>().unwrap();
        assert_eq!(
            CaesError::ParameterOutOfRange {
                name: "alpha",
                value: 1.4
            },
            err
        );
    }

    #[test]
    fn test_assignment_defaults_to_scintilla() {
        let mut standards = StandardAssignment::default();
        standards.set("murder", ProofStandard::BeyondReasonableDoubt);
        assert_eq!(ProofStandard::BeyondReasonableDoubt, standards.get(&"murder"));
        assert_eq!(ProofStandard::Scintilla, standards.get(&"intent"));
        assert_eq!(1, standards.iter().count());
    }
}
