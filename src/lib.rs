//! # IFC Assistant
//!
//! Extracts building-element tables from IFC files and answers questions
//! about them through a tool-calling chat model.
//!
//! ## Features
//!
//! - Read IFC STEP files (IFC2x3 and IFC4 schemas)
//! - Doors, windows, beams, columns, spaces and floors as normalized tables,
//!   with declared SI units applied and storey locations resolved
//! - JSON query tools over the tables
//! - Chat orchestration against an Ollama model
//! - Export to CSV and JSON, terminal browser
//!
//! ## Example
//!
//! ```no_run
//! use ifc_assistant::extract::extract_ifc_data;
//! use ifc_assistant::query::QueryContext;
//!
//! let tables = extract_ifc_data("model.ifc").expect("Failed to extract");
//! println!("Project: {}", tables.project_name);
//!
//! let ctx = QueryContext::new(&tables);
//! println!("{}", ctx.list_elements_type("doors"));
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod logging;
pub mod model;
pub mod parser;
pub mod query;
pub mod ui;
