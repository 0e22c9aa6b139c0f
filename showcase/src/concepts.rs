use crate::disclosure::Disclosure;

/// The prose pages that sit next to the algorithm lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concept {
    Pipelines,
    Rag,
    MlOps,
}

impl Concept {
    pub const ALL: [Concept; 3] = [Concept::Pipelines, Concept::Rag, Concept::MlOps];

    pub fn title(self) -> &'static str {
        match self {
            Concept::Pipelines => "ML Pipelines",
            Concept::Rag => "Retrieval-Augmented Generation",
            Concept::MlOps => "MLOps",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Concept::Pipelines => {
                "A pipeline chains every step from raw data to a served prediction so the \
                 exact same transformations run in training and in production."
            }
            Concept::Rag => {
                "RAG grounds a language model's answer in documents fetched at question time \
                 instead of relying only on what the model memorized."
            }
            Concept::MlOps => {
                "MLOps applies software delivery practice to models: versioned data, \
                 repeatable training, automated deployment and monitoring."
            }
        }
    }

    pub fn sections(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Concept::Pipelines => PIPELINES,
            Concept::Rag => RAG,
            Concept::MlOps => MLOPS,
        }
    }

    /// A fresh, fully collapsed view of this page's sections.
    pub fn disclosure(self) -> Disclosure {
        Disclosure::new(self.sections())
    }
}

const PIPELINES: &[(&str, &str)] = &[
    (
        "Data ingestion",
        "Pull raw records from databases, files or event streams and land them in one place \
         with a schema you can check.",
    ),
    (
        "Preprocessing",
        "Clean missing values, encode categories and scale numeric columns. Fit these \
         transforms on the training split only to avoid leaking test information.",
    ),
    (
        "Feature engineering",
        "Derive ratios, aggregates and time windows that expose the signal to the model. \
         Keep the code shared between training and serving.",
    ),
    (
        "Training and validation",
        "Fit candidate models with cross-validation, tune hyperparameters and keep a \
         held-out test set for the final estimate.",
    ),
    (
        "Serving",
        "Package the fitted pipeline as one artifact and expose it behind a batch job or an \
         online endpoint.",
    ),
];

const RAG: &[(&str, &str)] = &[
    (
        "Chunking",
        "Split source documents into passages small enough to embed and quote, usually a \
         few hundred tokens with some overlap.",
    ),
    (
        "Embedding and indexing",
        "Map every chunk to a vector and store it in an index that supports nearest \
         neighbor search.",
    ),
    (
        "Retrieval",
        "Embed the question, fetch the closest chunks and optionally rerank them with a \
         cross-encoder or keyword scores.",
    ),
    (
        "Generation",
        "Put the retrieved passages in the prompt and ask the model to answer using them, \
         citing where each claim came from.",
    ),
    (
        "Evaluation",
        "Measure retrieval recall and answer faithfulness separately, a good answer from a \
         bad context is luck.",
    ),
];

const MLOPS: &[(&str, &str)] = &[
    (
        "Versioning",
        "Track code, data snapshots and model weights together so any prediction can be \
         traced back to what produced it.",
    ),
    (
        "Experiment tracking",
        "Log parameters, metrics and artifacts of every run to compare them later.",
    ),
    (
        "Continuous training",
        "Retrain on a schedule or when new data arrives, gated by automated checks against \
         the current model.",
    ),
    (
        "Deployment",
        "Roll out behind canaries or shadow traffic and keep the previous model ready for \
         rollback.",
    ),
    (
        "Monitoring",
        "Watch input drift, prediction drift and business metrics, and alert before \
         accuracy silently decays.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_concept_has_collapsed_sections() {
        for concept in Concept::ALL {
            let disclosure = concept.disclosure();
            assert!(!disclosure.sections().is_empty());
            assert!(disclosure.sections().iter().all(|s| !s.open));
        }
    }
}
