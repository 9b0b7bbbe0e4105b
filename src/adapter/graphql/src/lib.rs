// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub(crate) mod mappers;
pub(crate) mod mutations;
pub(crate) mod prelude;
pub(crate) mod queries;
pub(crate) mod scalars;

mod extensions;
mod guards;
mod root;
pub(crate) mod utils;

pub use guards::*;
pub use mutations::UNAUTHORIZED_ACTION_MESSAGE;
pub use root::*;
