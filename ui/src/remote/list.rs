use std::fmt;
use std::sync::Arc;

use leptos::callback::{Callable, Callback};
use leptos::logging::error;
use leptos::prelude::{ReadSignal, RwSignal, Set};
use leptos::task::spawn_local;

use crate::config::RemoteListConfig;
use crate::error::LoadError;

use super::decode::Decode;
use super::loader::RemoteListLoader;
use super::source::{HttpSource, JsonSource};

/// Immutable snapshot of a decoded list. Starts empty, replaced wholesale.
pub struct RemoteList<T> {
    items: Arc<[T]>,
}

impl<T> RemoteList<T> {
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> From<Vec<T>> for RemoteList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl<T> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for RemoteList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for RemoteList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Starts the one fetch for this component instance and returns the list signal.
///
/// Without `on_error`, failures are logged to the console.
pub fn use_remote_list<T>(
    config: RemoteListConfig,
    on_error: Option<Callback<LoadError>>,
) -> ReadSignal<RemoteList<T>>
where
    T: Decode + Send + Sync + 'static,
{
    use_remote_list_from(config, HttpSource, on_error)
}

/// [`use_remote_list`] over any [`JsonSource`].
pub fn use_remote_list_from<T, S>(
    config: RemoteListConfig,
    source: S,
    on_error: Option<Callback<LoadError>>,
) -> ReadSignal<RemoteList<T>>
where
    T: Decode + Send + Sync + 'static,
    S: JsonSource + 'static,
{
    let list = RwSignal::new(RemoteList::<T>::empty());

    if !config.skip {
        let loader = RemoteListLoader::new(config, source);
        spawn_local(fill(loader, list, on_error));
    }

    list.read_only()
}

/// Runs the loader once and publishes the outcome. Success swaps the
/// snapshot; failure leaves it untouched and goes to `on_error`.
async fn fill<T, S>(
    loader: RemoteListLoader<S>,
    list: RwSignal<RemoteList<T>>,
    on_error: Option<Callback<LoadError>>,
) where
    T: Decode + Send + Sync + 'static,
    S: JsonSource,
{
    let Some(outcome) = loader.load::<T>().await else {
        return;
    };
    match outcome {
        // the owning component may be gone by now
        Ok(items) => {
            list.try_set(RemoteList::from(items));
        }
        Err(e) => report(on_error, e),
    }
}

fn report(on_error: Option<Callback<LoadError>>, err: LoadError) {
    match on_error {
        Some(cb) => cb.run(err),
        None => error!("{err}"),
    }
}
