//! Identity-lookup endpoint URL building.

use namescout_core::types::AvailabilityProvider;

/// Build the profile-lookup URL for a candidate.
///
/// Only the response status code is consumed downstream; the body is
/// ignored for both providers.
#[must_use]
pub fn profile_url(provider: AvailabilityProvider, candidate: &str) -> String {
    match provider {
        AvailabilityProvider::Mojang => {
            format!("https://api.mojang.com/users/profiles/minecraft/{candidate}")
        }
        AvailabilityProvider::Ashcon => {
            format!("https://api.ashcon.app/mojang/v2/user/{candidate}")
        }
    }
}
