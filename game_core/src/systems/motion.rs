use hecs::Entity;

use crate::components::Rect;
use crate::registry::Registry;
use crate::resources::{Axis, Bounce, Events};

/// Resolve at most one predicted collision for `rect`, then move it by its velocity.
///
/// `others` must not contain `rect` itself. Each obstacle is tested in order:
/// first for a crossing along x while the vertical ranges overlap, then for a
/// crossing along y while the horizontal ranges overlap. The first obstacle
/// that matches flips the corresponding velocity component and ends the scan.
/// Returns the index into `others` of the obstacle that caused the bounce.
pub fn advance<I>(rect: &mut Rect, others: I) -> Option<(usize, Axis)>
where
    I: IntoIterator<Item = Rect>,
{
    let mut hit = None;

    for (index, other) in others.into_iter().enumerate() {
        if crosses_horizontally(rect, &other) {
            rect.vel.x = -rect.vel.x;
            hit = Some((index, Axis::Horizontal));
            break;
        }
        if crosses_vertically(rect, &other) {
            rect.vel.y = -rect.vel.y;
            hit = Some((index, Axis::Vertical));
            break;
        }
    }

    rect.pos += rect.vel;
    hit
}

fn crosses_horizontally(r: &Rect, e: &Rect) -> bool {
    let overlaps_y = r.top() < e.bottom() && r.bottom() > e.top();
    let from_left = r.right() < e.left() && r.right() + r.vel.x >= e.left();
    let from_right = r.left() > e.right() && r.left() + r.vel.x <= e.right();
    overlaps_y && (from_left || from_right)
}

fn crosses_vertically(r: &Rect, e: &Rect) -> bool {
    let overlaps_x = r.left() < e.right() && r.right() > e.left();
    let from_above = r.bottom() < e.top() && r.bottom() + r.vel.y >= e.top();
    let from_below = r.top() > e.bottom() && r.top() + r.vel.y <= e.bottom();
    overlaps_x && (from_above || from_below)
}

/// Advance one registered rect against every other rect's current state
pub fn advance_entity(registry: &mut Registry, entity: Entity) -> Option<Bounce> {
    let mut rect = registry.rect(entity)?;

    // Snapshot taken now, so rects earlier in the order are seen already moved
    let others: Vec<(Entity, Rect)> = registry.rects().filter(|(e, _)| *e != entity).collect();

    let hit = advance(&mut rect, others.iter().map(|(_, r)| *r));
    if let Some(slot) = registry.rect_mut(entity) {
        *slot = rect;
    }

    hit.map(|(index, axis)| Bounce {
        entity,
        obstacle: others[index].0,
        axis,
    })
}

/// Advance one registered rect, recording any bounce in `events`
pub fn move_rect(registry: &mut Registry, entity: Entity, events: &mut Events) {
    if let Some(bounce) = advance_entity(registry, entity) {
        tracing::trace!(?bounce, "bounce");
        events.bounces.push(bounce);
    }
}
