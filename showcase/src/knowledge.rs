use serde::{Deserialize, Serialize};
use synthetic::Algorithm;

/// How much background the reader claims to have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl KnowledgeLevel {
    pub const ALL: [KnowledgeLevel; 3] = [
        KnowledgeLevel::Beginner,
        KnowledgeLevel::Intermediate,
        KnowledgeLevel::Advanced,
    ];

    pub fn title(self) -> &'static str {
        match self {
            KnowledgeLevel::Beginner => "Beginner",
            KnowledgeLevel::Intermediate => "Intermediate",
            KnowledgeLevel::Advanced => "Advanced",
        }
    }

    /// The next level, wrapping back to beginner.
    pub fn cycle(self) -> Self {
        match self {
            KnowledgeLevel::Beginner => KnowledgeLevel::Intermediate,
            KnowledgeLevel::Intermediate => KnowledgeLevel::Advanced,
            KnowledgeLevel::Advanced => KnowledgeLevel::Beginner,
        }
    }
}

/// The explanation of `algorithm` pitched at `level`.
pub fn explain(algorithm: Algorithm, level: KnowledgeLevel) -> &'static str {
    use KnowledgeLevel::*;

    match (algorithm, level) {
        (Algorithm::XgBoost, Beginner) => {
            "XGBoost builds a long line of small decision trees. Each new tree looks at the \
             mistakes the previous ones made and tries to fix them. Put together, many weak \
             guesses become one strong prediction."
        }
        (Algorithm::XgBoost, Intermediate) => {
            "Gradient boosting fits every new tree to the gradient of the loss with respect \
             to the current ensemble's output. The learning rate shrinks each tree's \
             contribution, max depth bounds interaction order and subsampling rows per tree \
             adds variance reduction similar to bagging."
        }
        (Algorithm::XgBoost, Advanced) => {
            "XGBoost uses a second order Taylor expansion of the loss, so split gain is \
             computed from summed gradients and hessians with L1/L2 penalties on leaf \
             weights. Histogram based split finding, sparsity aware defaults and column \
             blocks make it scale. Lower learning rates need more estimators but usually \
             generalize better."
        }
        (Algorithm::Knn, Beginner) => {
            "k-Nearest Neighbors labels a new point by looking at the k most similar points \
             it has already seen and letting them vote. There is no training step: the data \
             is the model."
        }
        (Algorithm::Knn, Intermediate) => {
            "kNN is a lazy, non-parametric learner. Small k gives low bias and high variance, \
             large k smooths the decision boundary. The distance metric defines what \
             similar means, and distance weighting lets closer neighbors count more. \
             Features must be scaled or the widest one dominates."
        }
        (Algorithm::Knn, Advanced) => {
            "Prediction costs O(n·d) per query without an index; KD-trees and ball trees \
             help in low dimensions while approximate methods such as HNSW take over in high \
             ones. Distances concentrate as dimensionality grows, which erodes the contrast \
             between neighbors. Minkowski with p=1 and p=2 recovers Manhattan and Euclidean."
        }
        (Algorithm::Linear, Beginner) => {
            "Linear regression draws the straight line (or flat surface) that best fits the \
             data. Each input gets a weight saying how much it pushes the prediction up or \
             down."
        }
        (Algorithm::Linear, Intermediate) => {
            "The model minimizes mean squared error with gradient descent: the learning rate \
             sets the step size and max iterations bounds how long it searches. L1 \
             regularization drives weights to zero, L2 shrinks them smoothly and elastic net \
             mixes both. Alpha sets the penalty strength."
        }
        (Algorithm::Linear, Advanced) => {
            "Ordinary least squares has the closed form (XᵀX)⁻¹Xᵀy, but iterative solvers \
             scale better and admit non-smooth penalties via coordinate descent or proximal \
             steps. Ridge keeps the problem strictly convex under collinearity, lasso \
             performs variable selection, and RMSE remains in the target's units."
        }
        (Algorithm::RandomForest, Beginner) => {
            "A random forest grows many decision trees, each on a slightly different random \
             sample of the data, and lets them vote. A crowd of varied trees makes fewer \
             mistakes than any single tree."
        }
        (Algorithm::RandomForest, Intermediate) => {
            "Each tree trains on a bootstrap sample and only considers a random subset of \
             features at every split (sqrt or log2 of the feature count). That decorrelates \
             the trees so averaging reduces variance. Out-of-bag rows give a free validation \
             estimate."
        }
        (Algorithm::RandomForest, Advanced) => {
            "Forest variance falls as ρσ² + (1−ρ)σ²/B, so lowering the correlation ρ between \
             trees matters more than adding trees past a point. Impurity based importances \
             favor high cardinality features; permutation importance on OOB samples is less \
             biased. Deep unpruned trees keep bias low."
        }
        (Algorithm::Svm, Beginner) => {
            "A support vector machine looks for the widest possible street separating two \
             classes. Only the points on the edge of the street, the support vectors, decide \
             where it goes."
        }
        (Algorithm::Svm, Intermediate) => {
            "C trades margin width against training errors: large C fits the data tightly, \
             small C tolerates mistakes for a wider margin. Kernels such as RBF and \
             polynomial let the SVM draw curved boundaries by comparing points in an \
             implicit higher dimensional space. Gamma controls how far one example reaches."
        }
        (Algorithm::Svm, Advanced) => {
            "The dual problem depends on the data only through the kernel matrix, which \
             must be positive semi-definite by Mercer's condition. SMO solves it by \
             optimizing pairs of Lagrange multipliers. Training is between O(n²) and O(n³), \
             so large datasets call for linear SVMs or kernel approximations."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_level() {
        let mut level = KnowledgeLevel::default();
        for expected in KnowledgeLevel::ALL {
            assert_eq!(level, expected);
            level = level.cycle();
        }
        assert_eq!(level, KnowledgeLevel::Beginner);
    }

    #[test]
    fn explanations_differ_by_level() {
        for algorithm in Algorithm::ALL {
            let texts: Vec<_> = KnowledgeLevel::ALL
                .iter()
                .map(|l| explain(algorithm, *l))
                .collect();
            assert!(texts.iter().all(|t| !t.is_empty()));
            assert_ne!(texts[0], texts[1]);
            assert_ne!(texts[1], texts[2]);
        }
    }
}
