//! File content handler implementation

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::params::FileReadParams;
use crate::query::default_revision;
use crate::sg::{queries, NotFound, SgClient, SgResult};
use crate::types::file::FileContentData;

use super::{parse_data, text_result};

/// Read a file's content at a revision
pub async fn file_read(
    client: &SgClient,
    params: FileReadParams,
) -> Result<CallToolResult, McpError> {
    match file_read_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error reading file: {}", e))),
    }
}

async fn file_read_report(client: &SgClient, params: &FileReadParams) -> SgResult<String> {
    let rev = default_revision(params.rev.as_deref());

    let data = client
        .query(
            queries::FILE_CONTENT,
            json!({ "repo": params.repo, "rev": rev, "path": params.path }),
        )
        .await?;
    let data: FileContentData = parse_data(data)?;

    let Some(repo) = data.repository else {
        return Err(NotFound::Repository(params.repo.clone()).into());
    };
    let Some(commit) = repo.commit else {
        return Err(NotFound::Revision {
            repo: params.repo.clone(),
            rev,
        }
        .into());
    };
    let Some(blob) = commit.file else {
        return Err(NotFound::File {
            repo: params.repo.clone(),
            rev,
            path: params.path.clone(),
        }
        .into());
    };

    let path = blob.path.as_deref().unwrap_or(params.path.as_str());
    let size = blob
        .byte_size
        .map(|b| b.to_string())
        .unwrap_or_else(|| "?".to_string());

    if blob.binary {
        return Ok(format!(
            "File: {} @ {} is binary ({} bytes); content not shown.",
            path, rev, size
        ));
    }

    let content = blob.content.unwrap_or_default();
    if content.is_empty() {
        return Ok(format!("File: {} @ {} is empty.", path, rev));
    }

    Ok(format!("File: {} @ {} ({} bytes)\n\n{}", path, rev, size, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_repository_stops_the_chain() {
        let data: FileContentData =
            serde_json::from_value(json!({ "repository": null })).unwrap();
        assert!(data.repository.is_none());
    }

    #[test]
    fn test_null_commit_below_repository() {
        let data: FileContentData = serde_json::from_value(json!({
            "repository": { "commit": null }
        }))
        .unwrap();
        assert!(data.repository.unwrap().commit.is_none());
    }

    #[test]
    fn test_binary_blob_parses() {
        let data: FileContentData = serde_json::from_value(json!({
            "repository": { "commit": { "file": {
                "path": "logo.png", "content": null, "binary": true, "byteSize": 2048
            }}}
        }))
        .unwrap();
        let blob = data.repository.unwrap().commit.unwrap().file.unwrap();
        assert!(blob.binary);
        assert_eq!(blob.byte_size, Some(2048));
    }
}
