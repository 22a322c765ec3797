//! Per-query `vqd` token acquisition for the news search endpoint.

use crate::core::{DeskError, net};

impl super::DeskClient {
    /// Returns the search token for `keyword`, fetching the landing page on first use.
    pub(crate) async fn search_token(&self, keyword: &str) -> Result<String, DeskError> {
        if let Some(tok) = self.tokens.read().await.get(keyword) {
            return Ok(tok.clone());
        }

        let mut url = self.base_search().clone();
        url.query_pairs_mut().append_pair("q", keyword);

        let resp = self.send(self.http().get(url)).await?;
        let body = net::get_text(resp, "search_token", keyword, "html").await?;

        let token = extract_vqd(&body)
            .ok_or_else(|| DeskError::Token(format!("no vqd token in response for '{keyword}'")))?;

        self.tokens
            .write()
            .await
            .insert(keyword.to_string(), token.clone());
        Ok(token)
    }

    /// Drops the cached token for `keyword`; the next search fetches a new one.
    pub(crate) async fn forget_token(&self, keyword: &str) {
        self.tokens.write().await.remove(keyword);
    }
}

/// Pulls the token out of `vqd="…"`, `vqd='…'` or `vqd=…&`.
fn extract_vqd(html: &str) -> Option<String> {
    const FORMS: [(&str, char); 3] = [("vqd=\"", '"'), ("vqd='", '\''), ("vqd=", '&')];

    FORMS.iter().find_map(|(open, close)| {
        let start = html.find(open)? + open.len();
        let rest = &html[start..];
        let tok = &rest[..rest.find(*close)?];
        let valid = !tok.is_empty()
            && !tok.contains(['"', '\'', '<', '{', ' ', '\n']);
        valid.then(|| tok.to_string())
    })
}
