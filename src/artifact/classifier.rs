use std::collections::BTreeSet;

use serde::Deserialize;

use super::ArtifactError;

/// Decision function of a fitted binary classifier.
pub trait Classifier: Send + Sync {
    fn kind(&self) -> &'static str;
    /// Raw class label for a single scaled row.
    fn predict(&self, row: &[f64]) -> i64;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelSpec {
    RandomForest(ForestClassifier),
    Logistic(LogisticClassifier),
}

impl ModelSpec {
    pub(crate) fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        match self {
            ModelSpec::RandomForest(forest) => forest.validate(n_features),
            ModelSpec::Logistic(logistic) => logistic.validate(n_features),
        }
    }

    pub fn n_estimators(&self) -> usize {
        match self {
            ModelSpec::RandomForest(forest) => forest.trees.len(),
            ModelSpec::Logistic(_) => 1,
        }
    }
}

impl Classifier for ModelSpec {
    fn kind(&self) -> &'static str {
        match self {
            ModelSpec::RandomForest(_) => "random_forest",
            ModelSpec::Logistic(_) => "logistic",
        }
    }

    fn predict(&self, row: &[f64]) -> i64 {
        match self {
            ModelSpec::RandomForest(forest) => forest.predict(row),
            ModelSpec::Logistic(logistic) => logistic.predict(row),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForestClassifier {
    pub classes: Vec<i64>,
    pub trees: Vec<DecisionTree>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

impl ForestClassifier {
    fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        check_classes(&self.classes)?;
        if self.trees.is_empty() {
            return Err(ArtifactError::InvalidModel("forest has no trees".into()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features, self.classes.len())
                .map_err(|reason| ArtifactError::InvalidModel(format!("tree {t}: {reason}")))?;
        }
        Ok(())
    }

    /// Averages the normalized leaf distributions and picks the most probable class.
    fn predict(&self, row: &[f64]) -> i64 {
        let mut proba = vec![0.0f64; self.classes.len()];
        for tree in &self.trees {
            let value = tree.leaf_value(row);
            let total: f64 = value.iter().sum();
            if total <= 0.0 {
                continue;
            }
            for (acc, v) in proba.iter_mut().zip(value) {
                *acc += v / total;
            }
        }

        // first maximum wins ties
        let mut best = 0usize;
        for (idx, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = idx;
            }
        }
        self.classes[best]
    }
}

impl DecisionTree {
    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("no nodes".into());
        }
        let n_nodes = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!(
                            "node {idx} splits on feature {feature}, only {n_features} columns"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has a non-finite threshold"));
                    }
                    // children must come after their parent so traversal always terminates
                    for child in [*left, *right] {
                        if child <= idx || child >= n_nodes {
                            return Err(format!("node {idx} has invalid child index {child}"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(format!(
                            "leaf {idx} has {} class weights, expected {n_classes}",
                            value.len()
                        ));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(format!("leaf {idx} has a negative or non-finite weight"));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_value(&self, row: &[f64]) -> &[f64] {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => return value,
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogisticClassifier {
    pub classes: Vec<i64>,
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LogisticClassifier {
    fn validate(&self, n_features: usize) -> Result<(), ArtifactError> {
        check_classes(&self.classes)?;
        if self.classes.len() != 2 {
            return Err(ArtifactError::InvalidModel(format!(
                "logistic model needs exactly 2 classes, got {}",
                self.classes.len()
            )));
        }
        if self.coef.len() != n_features {
            return Err(ArtifactError::InvalidModel(format!(
                "coef has {} entries, expected {n_features}",
                self.coef.len()
            )));
        }
        if !self.intercept.is_finite() || self.coef.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::InvalidModel(
                "logistic weights must be finite".into(),
            ));
        }
        Ok(())
    }

    fn predict(&self, row: &[f64]) -> i64 {
        let decision: f64 = self
            .coef
            .iter()
            .zip(row)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept;
        if decision > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}

fn check_classes(classes: &[i64]) -> Result<(), ArtifactError> {
    if classes.is_empty() {
        return Err(ArtifactError::InvalidModel("no classes recorded".into()));
    }
    let unique = classes.iter().collect::<BTreeSet<_>>();
    if unique.len() != classes.len() {
        return Err(ArtifactError::InvalidModel("duplicate class labels".into()));
    }
    Ok(())
}
