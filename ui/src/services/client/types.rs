use serde::{Deserialize, Serialize};

use crate::wizard::{ConfigPayload, CredentialsPayload};

/// YouTube side of a sync request
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct YoutubeSource {
    pub url: String,
}

/// Body of `POST /sync`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StartSyncRequest {
    pub spotify: CredentialsPayload,
    pub youtube: YoutubeSource,
    #[serde(rename = "spotifyPlaylistId")]
    pub spotify_playlist_id: String,
}

impl StartSyncRequest {
    pub fn new(credentials: &CredentialsPayload, config: &ConfigPayload) -> Self {
        Self {
            spotify: credentials.clone(),
            youtube: YoutubeSource {
                url: config.playlist_url.clone(),
            },
            spotify_playlist_id: config.target_playlist_id.clone(),
        }
    }
}

/// Body of a successful `POST /sync` response
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StartSyncResponse {
    pub job_id: Option<String>,
}
