//! GraphQL query documents
//!
//! The documents are opaque strings; the variable contract for each is noted
//! above it. Revisions are always sent as non-null strings, defaulted to
//! "HEAD" client-side.

/// Variables: `$name: String!`
pub const REPOSITORY_INFO: &str = r#"
query RepositoryInfo($name: String!) {
  repository(name: $name) {
    id
    name
    description
    url
    isPrivate
    isFork
    isArchived
    defaultBranch {
      displayName
    }
    createdAt
    updatedAt
  }
}
"#;

/// Variables: `$query: String, $first: Int!`
pub const REPOSITORY_LIST: &str = r#"
query RepositoryList($query: String, $first: Int!) {
  repositories(query: $query, first: $first) {
    nodes {
      name
      description
      url
      defaultBranch {
        displayName
      }
    }
    totalCount
  }
}
"#;

/// Variables: `$name: String!`
pub const REPOSITORY_LANGUAGES: &str = r#"
query RepositoryLanguages($name: String!) {
  repository(name: $name) {
    name
    languageStatistics {
      name
      totalBytes
      totalLines
    }
  }
}
"#;

/// Variables: `$repo: String!, $rev: String!, $path: String!`
pub const FILE_CONTENT: &str = r#"
query FileContent($repo: String!, $rev: String!, $path: String!) {
  repository(name: $repo) {
    commit(rev: $rev) {
      file(path: $path) {
        path
        content
        binary
        byteSize
        url
      }
    }
  }
}
"#;

/// Variables: `$repo: String!, $rev: String!, $path: String!,
/// $startLine: Int!, $endLine: Int!`
pub const FILE_BLAME: &str = r#"
query FileBlame($repo: String!, $rev: String!, $path: String!, $startLine: Int!, $endLine: Int!) {
  repository(name: $repo) {
    commit(rev: $rev) {
      blob(path: $path) {
        blame(startLine: $startLine, endLine: $endLine) {
          startLine
          endLine
          message
          author {
            person {
              name
              email
            }
            date
          }
          commit {
            oid
            abbreviatedOID
            url
          }
        }
      }
    }
  }
}
"#;

/// Variables: `$repo: String!, $rev: String!, $path: String!`
pub const DIRECTORY_TREE: &str = r#"
query DirectoryTree($repo: String!, $rev: String!, $path: String!) {
  repository(name: $repo) {
    commit(rev: $rev) {
      tree(path: $path) {
        entries(recursive: false) {
          name
          path
          isDirectory
          url
          submodule {
            url
            commit
          }
        }
      }
    }
  }
}
"#;

/// Variables: `$repo: String!, $first: Int!, $after: String`
pub const BRANCH_LIST: &str = r#"
query BranchList($repo: String!, $first: Int!, $after: String) {
  repository(name: $repo) {
    branches(first: $first, after: $after) {
      nodes {
        name
        displayName
        target {
          oid
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
      totalCount
    }
  }
}
"#;

/// Variables: `$query: String!, $version: SearchVersion!`
///
/// Shared by code, symbol, and commit search; the query string selects the
/// result type.
pub const SEARCH: &str = r#"
query Search($query: String!, $version: SearchVersion!) {
  search(query: $query, version: $version) {
    results {
      matchCount
      limitHit
      alert {
        title
        description
      }
      results {
        __typename
        ... on FileMatch {
          repository {
            name
          }
          file {
            path
            url
          }
          lineMatches {
            preview
            lineNumber
          }
          symbols {
            name
            containerName
            kind
            url
            location {
              resource {
                path
              }
              range {
                start {
                  line
                }
              }
            }
          }
        }
        ... on CommitSearchResult {
          commit {
            oid
            abbreviatedOID
            subject
            url
            author {
              person {
                name
              }
              date
            }
            repository {
              name
            }
          }
          messagePreview {
            value
          }
        }
      }
    }
  }
}
"#;

/// Variables: `$repo: String!, $rev: String!, $first: Int!`
pub const COMMIT_LIST: &str = r#"
query CommitList($repo: String!, $rev: String!, $first: Int!) {
  repository(name: $repo) {
    commit(rev: $rev) {
      ancestors(first: $first) {
        nodes {
          oid
          abbreviatedOID
          subject
          url
          author {
            person {
              name
              email
            }
            date
          }
        }
      }
    }
  }
}
"#;

/// Variables: `$repo: String!, $base: String!, $head: String!`
pub const COMMIT_DIFF: &str = r#"
query CommitDiff($repo: String!, $base: String!, $head: String!) {
  repository(name: $repo) {
    comparison(base: $base, head: $head) {
      fileDiffs {
        nodes {
          oldPath
          newPath
          stat {
            added
            changed
            deleted
          }
          hunks {
            oldRange {
              startLine
              lines
            }
            newRange {
              startLine
              lines
            }
            section
            body
          }
        }
      }
    }
  }
}
"#;
