// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates memoizing a simulated user-data fetch.
//!
//! The first lookup for an id runs the fetch; repeats are answered from the
//! stored entry, visible in the debug log as `lookup.event` hits.

use memofetch::MemoizingLookup;

#[derive(Clone, Debug)]
struct UserData {
    name: String,
    email: String,
}

fn fetch_user_data(user_id: u64) -> UserData {
    println!("  fetching user {user_id} from the database...");
    UserData {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut lookup = MemoizingLookup::new();

    let user = lookup.get(123, |id| fetch_user_data(*id));
    println!("first lookup:  {} <{}>", user.name, user.email);

    let user = lookup.get(123, |id| fetch_user_data(*id));
    println!("second lookup: {} <{}>", user.name, user.email);

    println!("hits = {}, entries = {}", lookup.hits(), lookup.len());
}
