//! # flashstudy - flashcard sets and notes in flat files
//!
//! flashstudy keeps two collections, study sets of flashcards and free-form
//! notes, each persisted to a single flat file that is rewritten on every
//! change. Any front-end (the bundled CLI, or a GUI) works through
//! [`storage::Store`].
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a set with two cards
//! flashstudy set create "Spanish" --card "perro::dog::1" --card "gato::cat"
//!
//! # Study it, priority 1 cards first
//! flashstudy set study 0
//!
//! # Take a note
//! flashstudy note create "Lecture 4" --text "Mitochondria are the powerhouse."
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (StudySet, Flashcard, Note, StudySession)
//! - [`storage`]: Flat-file storage and the record codecs
//! - [`validation`]: Input validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.flashstudy.yml` files and project discovery.
pub mod config;

/// Error types and result aliases.
pub mod error;

pub mod logging;

/// Data models for sets, cards and notes.
pub mod model;

/// File-based storage layer.
pub mod storage;

/// Input validation for titles, card lists and card drafts.
pub mod validation;
