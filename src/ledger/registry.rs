//! Token Registry - append-only lists of lending and borrowing tokens
//!
//! Listings keep insertion order and are never removed or edited. A
//! mis-registered token can only be shadowed by appending a corrected entry.
//! Re-adding an address appends a second listing for it.

use odra::prelude::*;

/// Which registry a listing belongs to
#[odra::odra_type]
pub enum ListingSide {
    /// Tokens suppliers may lend
    Lending,
    /// Tokens borrowers may draw
    Borrowing,
}

/// A registered token
#[odra::odra_type]
pub struct TokenListing {
    /// Name given by the admin when listing
    pub display_name: String,
    /// Token contract address
    pub token_address: Address,
}

/// Ordered token registries for both sides of the market
#[odra::module]
pub struct TokenRegistry {
    /// Listings by (side, index)
    listings: Mapping<(ListingSide, u32), TokenListing>,
    /// Number of listings per side
    listing_count: Mapping<ListingSide, u32>,
    /// Membership flag per (side, token)
    listed: Mapping<(ListingSide, Address), bool>,
}

#[odra::module]
impl TokenRegistry {
    /// Append a listing and return its index
    pub fn append(&mut self, side: ListingSide, display_name: String, token_address: Address) -> u32 {
        let index = self.count(side.clone());
        self.listings.set(
            &(side.clone(), index),
            TokenListing {
                display_name,
                token_address,
            },
        );
        self.listing_count.set(&side, index + 1);
        self.listed.set(&(side, token_address), true);
        index
    }

    /// Number of listings on a side, duplicates included
    pub fn count(&self, side: ListingSide) -> u32 {
        self.listing_count.get(&side).unwrap_or_default()
    }

    /// All listings on a side in insertion order
    pub fn listings(&self, side: ListingSide) -> Vec<TokenListing> {
        let count = self.count(side.clone());
        let mut listings = Vec::new();
        for index in 0..count {
            if let Some(listing) = self.listings.get(&(side.clone(), index)) {
                listings.push(listing);
            }
        }
        listings
    }

    pub fn is_listed(&self, side: ListingSide, token_address: Address) -> bool {
        self.listed.get(&(side, token_address)).unwrap_or_default()
    }
}
