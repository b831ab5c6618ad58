//! Player profiles lookup.
//!
//! Profiles live off-chain and are joined onto on-chain standings by wallet
//! address, case-insensitively.

use std::collections::HashMap;

use alloy::primitives::Address;
use itertools::Itertools;
use serde::Deserialize;
use url::Url;

use crate::{
    error::LeaderboardError,
    transport::HttpTransport,
    types::{ProfileInfo, Standings},
};

/// Profile as returned by the profile service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub address: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize)]
struct ProfilesResponse {
    data: Vec<Profile>,
}

/// URL selecting the profiles of all `addresses` in one request.
pub fn lookup_url(base: &str, addresses: &[Address]) -> Result<Url, LeaderboardError> {
    let filter = addresses
        .iter()
        .map(|address| format!("address[$in]={address}"))
        .join("&");
    Ok(Url::parse(&format!("{base}?{filter}&$limit={}", addresses.len()))?)
}

/// Fetches the profiles of `addresses` from the profile service at `base`.
pub async fn fetch_profiles<H: HttpTransport>(
    http: &H,
    base: &str,
    addresses: &[Address],
) -> Result<Vec<Profile>, LeaderboardError> {
    let response = http.get_json(lookup_url(base, addresses)?).await?;
    Ok(serde_json::from_value::<ProfilesResponse>(response)?.data)
}

/// Left-joins `profiles` onto `standings`.
///
/// Every player keeps its on-chain score; players without a profile get no
/// username and no avatar. The first profile of an address wins.
pub fn hydrate(standings: &Standings, profiles: &[Profile]) -> Vec<ProfileInfo> {
    let mut by_address = HashMap::with_capacity(profiles.len());
    for profile in profiles {
        by_address
            .entry(profile.address.to_ascii_lowercase())
            .or_insert(profile);
    }

    standings
        .iter()
        .map(|(wallet, score)| {
            let profile = by_address.get(&wallet.to_string().to_ascii_lowercase());
            ProfileInfo {
                wallet,
                score,
                username: profile.and_then(|p| p.username.clone()),
                avatar: profile.and_then(|p| p.avatar.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    const ALICE: Address = address!("0xDaed2A2b14d9769eAC43c63121718af7ca4Ac5D1");
    const BOB: Address = address!("0xD0501094c315899D15fbF1FC6d7F814049cFb8d7");

    #[test]
    fn test_lookup_url() {
        let url = lookup_url("https://profiles.example/profiles", &[ALICE, BOB]).unwrap();
        assert_eq!(
            url.as_str(),
            format!(
                "https://profiles.example/profiles?address[$in]={}&address[$in]={}&$limit=2",
                ALICE.to_checksum(None),
                BOB.to_checksum(None)
            )
        );
        assert!(lookup_url("not a url", &[ALICE]).is_err());
    }

    #[test]
    fn test_hydrate_is_case_insensitive_left_join() {
        let standings = Standings::new(vec![ALICE, BOB], vec![2000, 1000]).unwrap();
        let profiles = vec![
            Profile {
                address: ALICE.to_string().to_lowercase(),
                username: Some("alice".to_string()),
                avatar: Some("https://avatars.example/alice.png".to_string()),
            },
            Profile {
                address: ALICE.to_string().to_uppercase(),
                username: Some("impostor".to_string()),
                avatar: None,
            },
        ];

        let hydrated = hydrate(&standings, &profiles);
        assert_eq!(
            hydrated,
            vec![
                ProfileInfo {
                    wallet: ALICE,
                    score: 2000,
                    username: Some("alice".to_string()),
                    avatar: Some("https://avatars.example/alice.png".to_string()),
                },
                ProfileInfo { wallet: BOB, score: 1000, username: None, avatar: None },
            ]
        );
    }
}
