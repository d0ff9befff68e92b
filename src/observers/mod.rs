//! Change notification.
//!
//! A host (typically the presentation layer) subscribes once and re-renders
//! whenever it is told the game changed. Any `FnMut(&GameState)` closure is
//! an observer.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kalah_engine::core::{GameConfig, GameState, Side};
//! use kalah_engine::rules::KalahEngine;
//!
//! let mut engine = KalahEngine::new(GameConfig::new().first_player(Side::A)).unwrap();
//!
//! let redraws = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&redraws);
//! let id = engine.subscribe(move |_: &GameState| counter.set(counter.get() + 1));
//!
//! engine.make_move(Side::A, 2).unwrap();
//! assert_eq!(redraws.get(), 1);
//!
//! engine.unsubscribe(id);
//! engine.make_move(Side::A, 0).unwrap();
//! assert_eq!(redraws.get(), 1);
//! ```

mod registry;

pub use registry::{Observer, ObserverRegistry, SubscriptionId};
