/// Expo Push Shared Library
///
/// This library provides a unified Expo push client for delivering
/// notifications to registered device tokens across the platform.
///
/// It handles:
/// - Message construction with the default sound indicator
/// - Single-request delivery to one or more recipient tokens
/// - Typed delivery errors for transport and API failures

pub mod client;
pub mod errors;
pub mod models;

pub use client::{ExpoPushClient, EXPO_PUSH_ENDPOINT};
pub use errors::ExpoPushError;
pub use models::ExpoPushMessage;
