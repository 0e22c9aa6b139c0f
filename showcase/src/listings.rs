use synthetic::Algorithm;

/// A static example program shown next to an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub title: &'static str,
    pub language: &'static str,
    pub source: &'static str,
}

impl Listing {
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.source.lines()
    }
}

pub fn listing(algorithm: Algorithm) -> Listing {
    match algorithm {
        Algorithm::XgBoost => Listing {
            title: "Gradient boosting with xgboost",
            language: "python",
            source: r#"import xgboost as xgb
from sklearn.datasets import load_breast_cancer
from sklearn.model_selection import train_test_split
from sklearn.metrics import accuracy_score

X, y = load_breast_cancer(return_X_y=True)
X_train, X_test, y_train, y_test = train_test_split(X, y, test_size=0.2)

model = xgb.XGBClassifier(
    max_depth=3,
    learning_rate=0.1,
    n_estimators=100,
    subsample=0.8,
)
model.fit(X_train, y_train)
print("accuracy:", accuracy_score(y_test, model.predict(X_test)))"#,
        },
        Algorithm::Knn => Listing {
            title: "k-nearest neighbors with scikit-learn",
            language: "python",
            source: r#"from sklearn.datasets import load_iris
from sklearn.model_selection import train_test_split
from sklearn.neighbors import KNeighborsClassifier
from sklearn.preprocessing import StandardScaler
from sklearn.pipeline import make_pipeline

X, y = load_iris(return_X_y=True)
X_train, X_test, y_train, y_test = train_test_split(X, y, stratify=y)

model = make_pipeline(
    StandardScaler(),
    KNeighborsClassifier(n_neighbors=5, metric="euclidean", weights="uniform"),
)
model.fit(X_train, y_train)
print("accuracy:", model.score(X_test, y_test))"#,
        },
        Algorithm::Linear => Listing {
            title: "Regularized linear regression",
            language: "python",
            source: r#"import numpy as np
from sklearn.linear_model import SGDRegressor
from sklearn.metrics import mean_squared_error, r2_score

rng = np.random.default_rng(0)
X = rng.normal(size=(500, 4))
y = X @ np.array([0.8, -0.45, 0.3, 0.12]) + 1.0 + rng.normal(scale=0.3, size=500)

model = SGDRegressor(
    eta0=0.01,
    max_iter=1000,
    penalty="l2",
    alpha=0.1,
)
model.fit(X, y)
pred = model.predict(X)
print("rmse:", mean_squared_error(y, pred) ** 0.5)
print("r2:", r2_score(y, pred))"#,
        },
        Algorithm::RandomForest => Listing {
            title: "Random forest with out-of-bag scoring",
            language: "python",
            source: r#"from sklearn.datasets import make_classification
from sklearn.ensemble import RandomForestClassifier

X, y = make_classification(n_samples=2000, n_features=5, random_state=0)

model = RandomForestClassifier(
    n_estimators=100,
    max_depth=10,
    min_samples_split=2,
    max_features="sqrt",
    oob_score=True,
)
model.fit(X, y)
print("oob score:", model.oob_score_)
for name, weight in zip(["income", "age", "tenure", "balance", "activity"],
                        model.feature_importances_):
    print(f"{name:>10}: {weight:.3f}")"#,
        },
        Algorithm::Svm => Listing {
            title: "Kernel SVM classifier",
            language: "python",
            source: r#"from sklearn.datasets import make_moons
from sklearn.model_selection import train_test_split
from sklearn.svm import SVC

X, y = make_moons(n_samples=500, noise=0.2)
X_train, X_test, y_train, y_test = train_test_split(X, y)

model = SVC(C=1.0, kernel="rbf", gamma=0.1, degree=3)
model.fit(X_train, y_train)
print("support vectors:", model.n_support_.sum())
print("accuracy:", model.score(X_test, y_test))"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_has_a_listing() {
        for algorithm in Algorithm::ALL {
            let listing = listing(algorithm);
            assert!(listing.lines().count() > 5);
            assert_eq!(listing.language, "python");
        }
    }
}
