use crate::api::{Post, Project, Repository, StoreError, StoreHandle};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub projects: Option<usize>,
    pub posts: Option<usize>,
    pub published_posts: Option<usize>,
}

fn logged(label: &str, result: Result<usize, StoreError>) -> Option<usize> {
    result
        .map_err(|err| log::error!("Error counting {}: {}", label, err))
        .ok()
}

/// Count-only queries; a failed count is reported as unknown.
pub async fn fetch_counts(store: StoreHandle) -> DashboardCounts {
    let projects = Repository::<Project>::new(store.clone());
    let posts = Repository::<Post>::new(store);
    DashboardCounts {
        projects: logged("projects", projects.count().await),
        posts: logged("posts", posts.count().await),
        published_posts: logged("published posts", posts.count_where("published", true).await),
    }
}

pub fn display_count(count: Option<usize>) -> String {
    count
        .map(|value| value.to_string())
        .unwrap_or_else(|| "—".to_string())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{
        test_support::{MemoryStore, Op, StoreCall},
        Collection, Query,
    };
    use crate::test_support::fixtures::{post_row, project_row};

    #[tokio::test]
    async fn counts_projects_posts_and_published_posts() {
        let store = MemoryStore::new();
        store.seed(
            Collection::Projects,
            vec![project_row("p1", "One"), project_row("p2", "Two")],
        );
        store.seed(
            Collection::Posts,
            vec![
                post_row("b1", "Draft", "draft", false),
                post_row("b2", "Live", "live", true),
                post_row("b3", "Also live", "also-live", true),
            ],
        );

        let counts = fetch_counts(store.handle()).await;

        assert_eq!(
            counts,
            DashboardCounts {
                projects: Some(2),
                posts: Some(3),
                published_posts: Some(2),
            }
        );
        assert!(store.calls().contains(&StoreCall::Count(
            Query::new(Collection::Posts).eq("published", true)
        )));
        assert!(!store
            .calls()
            .iter()
            .any(|call| matches!(call, StoreCall::Select(_))));
    }

    #[tokio::test]
    async fn failed_counts_are_unknown() {
        let store = MemoryStore::new();
        store.fail_on(Op::Count, StoreError::NotConfigured);
        assert_eq!(fetch_counts(store.handle()).await, DashboardCounts::default());
    }
}
