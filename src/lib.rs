//! # Workshop Showcase
//!
//! Renders a visual card for each item in a curated list of Steam Workshop
//! mods — a thumbnail plus an SVG usage-statistics panel — and injects the
//! resulting HTML fragment into a marked region of a README.
//!
//! # Architecture: One Pass, Four Stages
//!
//! ```text
//! 1. Fetch     item ids          →  metadata       (one batched API call)
//! 2. Render    metadata + config →  media/<id>/    (thumbnail.png + stats.svg)
//! 3. Assemble  rendered cards    →  HTML fragment  (configured order)
//! 4. Inject    fragment          →  README.md      (between comment markers)
//! ```
//!
//! The run is all-or-nothing: a failure at any stage aborts before the
//! document is written, so a broken run never half-updates a README.
//! Injection is idempotent — running the tool twice with the same inputs
//! leaves the document byte-identical.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`workshop`] | Stage 1 — batched `GetDetails` client behind the [`workshop::MetadataSource`] seam |
//! | [`card`] | Stage 2 — aspect-fit thumbnail compositing and SVG stats panels |
//! | [`showcase`] | Stage 3 — ordered HTML fragment from rendered cards |
//! | [`inject`] | Stage 4 — idempotent region replacement between comment markers |
//! | [`pipeline`] | Sequencing, id resolution, parallel rendering, error policy |
//! | [`config`] | `showcase.toml` loading and validation |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! Both the SVG stats panel and the injected HTML fragment are generated
//! with [Maud](https://maud.lambda.xyz/), a compile-time markup macro
//! system. Malformed markup is a build error, and every interpolated value
//! is auto-escaped — a workshop title full of angle brackets becomes text,
//! never markup. This is what keeps untrusted mod titles from corrupting
//! the panel or the host document.
//!
//! ## Contain, Never Crop
//!
//! Preview images on the workshop come in every aspect ratio. Thumbnails
//! use an aspect-fit (contain) transform: scaled uniformly to fit the card's
//! thumbnail region and centered, letterboxed with transparency on the
//! shorter axis. The full artwork is always visible, undistorted.
//!
//! ## One Fetch, Then Offline
//!
//! All metadata — for showcased items and for linked items whose counters
//! are folded into a card's totals — comes from a single batched request
//! issued before any rendering starts. Rendering never triggers metadata
//! calls, which keeps cards independent and safe to render in parallel.

pub mod card;
pub mod config;
pub mod inject;
pub mod pipeline;
pub mod showcase;
pub mod workshop;
