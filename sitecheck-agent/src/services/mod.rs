// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod candidates;
pub mod checker;
pub mod error;
pub mod logging;
pub mod origin;
pub mod prober;
pub mod robots;
pub mod robots_fetcher;
