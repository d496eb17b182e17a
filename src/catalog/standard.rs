//! Built-in algorithm descriptors

use super::descriptor::{AlgorithmDescriptor, ProblemType};
use super::registry::AlgorithmCatalog;
use crate::error::Result;

/// Descriptors registered by [`AlgorithmCatalog::standard`], in registration order
pub fn standard_descriptors() -> Result<Vec<AlgorithmDescriptor>> {
    use ProblemType::*;

    Ok(vec![
        // Linear models
        AlgorithmDescriptor::builder()
            .name("Logistic Regression")
            .problem_type(Classification)
            .description("A statistical model that uses a logistic function to model a binary dependent variable.")
            .pros(["Simple and Interpretable", "Fast Training", "Good baseline"])
            .cons(["Assumes linear boundary", "Sensitive to outliers", "Cannot handle complex relationships"])
            .complexity(2)
            .handles_sparse(true)
            .build()?,
        AlgorithmDescriptor::builder()
            .name("Linear Regression")
            .problem_type(Regression)
            .description("Models the relationship between a scalar response and one or more explanatory variables using a linear equation.")
            .pros(["Simple and Interpretable", "Fast", "No hyperparameter tuning needed (usually)"])
            .cons(["Assumes linear relationship", "Sensitive to outliers"])
            .complexity(1)
            .handles_sparse(true)
            .build()?,
        AlgorithmDescriptor::builder()
            .name("Ridge Regression")
            .problem_type(Regression)
            .description("Linear least squares with L2 regularization to shrink coefficients and stabilize correlated features.")
            .pros(["Handles multicollinearity", "Fast", "Interpretable coefficients"])
            .cons(["Assumes linear relationship", "Requires feature scaling"])
            .complexity(2)
            .handles_sparse(true)
            .build()?,
        // Tree-based models
        AlgorithmDescriptor::builder()
            .name("Random Forest")
            .problem_type(Classification)
            .description("An ensemble learning method that fits a number of decision tree classifiers on various sub-samples of the dataset.")
            .pros(["Robust to overfitting", "Handles non-linear data", "Handles outliers well"])
            .cons(["Slow prediction", "Hard to interpret", "Large model size"])
            .complexity(5)
            .handles_missing(true)
            .robust_to_imbalance(true)
            .build()?,
        AlgorithmDescriptor::builder()
            .name("Random Forest Regressor")
            .problem_type(Regression)
            .description("Averages many decision trees fitted on bootstrap samples to predict a continuous target.")
            .pros(["Handles non-linear data", "Little preprocessing needed", "Robust to outliers"])
            .cons(["Cannot extrapolate beyond training range", "Large model size"])
            .complexity(5)
            .handles_missing(true)
            .robust_to_imbalance(true)
            .build()?,
        AlgorithmDescriptor::builder()
            .name("XGBoost")
            .problem_type(Classification)
            .description("Optimized distributed gradient boosting library designed to be highly efficient, flexible and portable.")
            .pros(["State-of-the-art performance", "Handles missing values", "Regularization built-in"])
            .cons(["Many hyperparameters", "Can overfit if not tuned"])
            .complexity(7)
            .handles_missing(true)
            .handles_sparse(true)
            .robust_to_imbalance(true)
            .build()?,
        // Neural networks
        AlgorithmDescriptor::builder()
            .name("Multi-Layer Perceptron (MLP)")
            .problem_type(Classification)
            .description("A class of feedforward artificial neural network. An MLP consists of at least three layers of nodes: an input layer, a hidden layer and an output layer.")
            .pros(["Can learn complex non-linear relationships", "Flexible architecture"])
            .cons(["Requires large data", "Hard to interpret", "Computationally expensive", "Sensitive to scaling"])
            .complexity(8)
            .min_samples(1000)
            .build()?,
        AlgorithmDescriptor::builder()
            .name("Convolutional Neural Network (CNN)")
            .problem_type(Classification)
            .description("A deep learning algorithm which can take in an input image, assign importance to various aspects/objects in the image and be able to differentiate one from the other.")
            .pros(["Excellent at spatial pattern recognition (Images)", "Parameter sharing"])
            .cons(["Computationally very expensive", "Requires GPU", "Black box"])
            .complexity(9)
            .min_samples(2000)
            .build()?,
        // Support vector machines
        AlgorithmDescriptor::builder()
            .name("Support Vector Machine (SVM)")
            .problem_type(Classification)
            .description("Finds the hyperplane that best separates classes with the maximum margin.")
            .pros(["Effective in high dimensional spaces", "Versatile kernels"])
            .cons(["Not suitable for large datasets", "Sensitive to noise", "Requires feature scaling"])
            .complexity(6)
            .build()?,
        // Naive Bayes
        AlgorithmDescriptor::builder()
            .name("Gaussian Naive Bayes")
            .problem_type(Classification)
            .description("Probabilistic classifier based on Bayes' theorem with the assumption of independence between features.")
            .pros(["Extremely fast", "Simple", "Good for text/high-dim"])
            .cons(["Assumes feature independence (rarely true)", "Can be outperformed by complex models"])
            .complexity(1)
            .min_samples(10)
            .build()?,
        // Boosting
        AlgorithmDescriptor::builder()
            .name("AdaBoost")
            .problem_type(Classification)
            .description("An iterative ensemble method that adjusts weights of incorrectly classified instances so that subsequent classifiers focus on difficult cases.")
            .pros(["Less prone to overfitting than some", "Easy to implement"])
            .cons(["Sensitive to noisy data and outliers"])
            .complexity(4)
            .robust_to_imbalance(true)
            .build()?,
        AlgorithmDescriptor::builder()
            .name("K-Nearest Neighbors")
            .problem_type(Classification)
            .description("Non-parametric method where the input consists of the k closest training examples in the feature space.")
            .pros(["Simple", "No training phase"])
            .cons(["Slow prediction", "Sensitive to noise", "Curse of dimensionality"])
            .complexity(3)
            .build()?,
        // Unsupervised
        AlgorithmDescriptor::builder()
            .name("K-Means")
            .problem_type(Clustering)
            .description("Partitions observations into k clusters by minimizing within-cluster variance around centroids.")
            .pros(["Fast", "Easy to interpret", "Scales to large datasets"])
            .cons(["Number of clusters must be chosen", "Assumes spherical clusters", "Sensitive to scaling"])
            .complexity(3)
            .build()?,
        AlgorithmDescriptor::builder()
            .name("Principal Component Analysis (PCA)")
            .problem_type(DimensionalityReduction)
            .description("Projects data onto orthogonal directions of maximum variance.")
            .pros(["Removes correlated features", "Fast", "Deterministic"])
            .cons(["Linear projections only", "Components are hard to interpret"])
            .complexity(2)
            .handles_sparse(true)
            .build()?,
    ])
}

impl AlgorithmCatalog {
    /// Catalog pre-populated with the built-in descriptors
    pub fn standard() -> Result<Self> {
        let catalog = Self::new();
        catalog.register_all(standard_descriptors()?);
        Ok(catalog)
    }
}
