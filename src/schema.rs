//! @ai:module:intent Fixed result-file schema: column names and known category values
//! @ai:module:layer domain
//! @ai:module:public_api SCORE_COLUMN, Dimension, FeatureSelector, FeatureCount, Balancer, Classifier
//! @ai:module:stateless true

use serde::Serialize;

/// Name of the score column in every results file.
pub const SCORE_COLUMN: &str = "G-Mean";

/// @ai:intent Feature-selection algorithm used by a pipeline run
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSelector {
    ReliefF,
    Sdae,
    Fcbf,
}

impl FeatureSelector {
    pub const ALL: [FeatureSelector; 3] = [Self::ReliefF, Self::Sdae, Self::Fcbf];

    /// @ai:intent Convert selector to the text used in results files
    /// @ai:effects pure
    pub const fn as_str(self) -> &'static str {
        match self {
            FeatureSelector::ReliefF => "ReliefF",
            FeatureSelector::Sdae => "SDAE",
            FeatureSelector::Fcbf => "FCBF",
        }
    }
}

/// @ai:intent Number of features kept by the selection step
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureCount {
    Ten,
    Fifty,
    Hundred,
}

impl FeatureCount {
    pub const ALL: [FeatureCount; 3] = [Self::Ten, Self::Fifty, Self::Hundred];

    pub const fn as_str(self) -> &'static str {
        match self {
            FeatureCount::Ten => "10",
            FeatureCount::Fifty => "50",
            FeatureCount::Hundred => "100",
        }
    }

    pub const fn count(self) -> u32 {
        match self {
            FeatureCount::Ten => 10,
            FeatureCount::Fifty => 50,
            FeatureCount::Hundred => 100,
        }
    }
}

/// @ai:intent Class-imbalance correction applied before classification
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Balancer {
    Smote,
    SmoteTomek,
    NearMiss,
}

impl Balancer {
    pub const ALL: [Balancer; 3] = [Self::Smote, Self::SmoteTomek, Self::NearMiss];

    pub const fn as_str(self) -> &'static str {
        match self {
            Balancer::Smote => "SMOTE",
            Balancer::SmoteTomek => "SMOTETomek",
            Balancer::NearMiss => "NearMiss",
        }
    }
}

/// @ai:intent Classifier trained in a pipeline run
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classifier {
    Mlp,
    Cnn,
    DecisionTree,
}

impl Classifier {
    pub const ALL: [Classifier; 3] = [Self::Mlp, Self::Cnn, Self::DecisionTree];

    pub const fn as_str(self) -> &'static str {
        match self {
            Classifier::Mlp => "MLP",
            Classifier::Cnn => "CNN",
            Classifier::DecisionTree => "DecisionTree",
        }
    }
}

/// @ai:intent One categorical configuration axis of a results file
/// @ai:effects pure
///
/// `Dimension::ALL` is the order used for loading, ranking and every report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    FeatureSelection,
    FeatureCount,
    Balancing,
    Classifier,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Self::FeatureSelection,
        Self::FeatureCount,
        Self::Balancing,
        Self::Classifier,
    ];

    /// @ai:intent Exact column header for this dimension
    /// @ai:effects pure
    pub const fn column(self) -> &'static str {
        match self {
            Dimension::FeatureSelection => "Algoritmo de seleção de atributos",
            Dimension::FeatureCount => "Número de atributos selecionados",
            Dimension::Balancing => "Método de Balanceamento",
            Dimension::Classifier => "Classificador",
        }
    }

    /// @ai:intent Known values in declaration order; ranking ties keep this order
    /// @ai:effects pure
    pub fn values(self) -> [&'static str; 3] {
        match self {
            Dimension::FeatureSelection => FeatureSelector::ALL.map(FeatureSelector::as_str),
            Dimension::FeatureCount => FeatureCount::ALL.map(FeatureCount::as_str),
            Dimension::Balancing => Balancer::ALL.map(Balancer::as_str),
            Dimension::Classifier => Classifier::ALL.map(Classifier::as_str),
        }
    }

    /// @ai:intent Check whether a raw cell holds the given known value
    /// @ai:effects pure
    ///
    /// Feature counts compare numerically so `10.0` matches `10`.
    pub fn matches(self, raw: &str, expected: &str) -> bool {
        match self {
            Dimension::FeatureCount => match (raw.trim().parse::<f64>(), expected.parse::<f64>()) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            },
            _ => raw == expected,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}
