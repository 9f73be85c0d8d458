//! Shipped content tables: the quiz bank, the Java levels, and the
//! annotated voting contract. Plain data, validated like any other pack.

pub mod contract;
pub mod java;
pub mod quiz;
