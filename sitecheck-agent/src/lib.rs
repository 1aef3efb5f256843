// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Robots.txt and sitemap discovery for a single site.
//!
//! [`services::checker::SiteChecker`] runs the whole check as a library call;
//! [`app::create_router`] exposes it over HTTP.

pub mod app;
pub mod models;
pub mod services;
