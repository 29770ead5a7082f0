//! Scriptable windows for unit tests.

use super::input::InputFrame;
use super::window::{ActivationMode, Location, MenuWindows, SubWindow};
use crate::core::WindowId;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub(crate) struct WindowSpy {
    pub active: bool,
    pub last_mode: Option<ActivationMode>,
    pub activations: usize,
    pub updates: usize,
    pub location: Option<Location>,
    pub picking_second: bool,
}

pub(crate) struct FakeWindow {
    spy: Rc<RefCell<WindowSpy>>,
}

impl FakeWindow {
    pub fn new() -> (Self, Rc<RefCell<WindowSpy>>) {
        let spy = Rc::new(RefCell::new(WindowSpy::default()));
        (
            Self {
                spy: Rc::clone(&spy),
            },
            spy,
        )
    }
}

impl SubWindow for FakeWindow {
    fn is_active(&self) -> bool {
        self.spy.borrow().active
    }

    // Cancel hands focus back, the way real windows close themselves.
    fn update(&mut self, input: &InputFrame) {
        let mut spy = self.spy.borrow_mut();
        spy.updates += 1;
        if input.cancel {
            spy.active = false;
        }
    }

    fn activate(&mut self, enable: bool, mode: ActivationMode) {
        let mut spy = self.spy.borrow_mut();
        spy.active = enable;
        if enable {
            spy.activations += 1;
            spy.last_mode = Some(mode);
        }
    }

    fn viewing_location(&self) -> Option<Location> {
        self.spy.borrow().location.clone()
    }

    fn picking_second(&self) -> bool {
        self.spy.borrow().picking_second
    }
}

pub(crate) struct Spies(Vec<(WindowId, Rc<RefCell<WindowSpy>>)>);

impl Spies {
    pub fn get(&self, id: WindowId) -> &Rc<RefCell<WindowSpy>> {
        self.0
            .iter()
            .find(|(window, _)| *window == id)
            .map(|(_, spy)| spy)
            .expect("every window has a spy")
    }
}

pub(crate) fn window_set() -> (MenuWindows, Spies) {
    let mut spies = Vec::new();
    let mut make = |id: WindowId| -> Box<dyn SubWindow> {
        let (window, spy) = FakeWindow::new();
        spies.push((id, spy));
        Box::new(window)
    };

    let windows = MenuWindows {
        inventory: make(WindowId::Inventory),
        party: make(WindowId::Party),
        skills: make(WindowId::Skills),
        equip: make(WindowId::Equip),
        quest: make(WindowId::Quest),
        quest_list: make(WindowId::QuestList),
        world_map: make(WindowId::WorldMap),
    };
    (windows, Spies(spies))
}
