use trellis_core::task::Category;

mod calendar_grid;
mod filter_sidebar;
mod month_nav;
mod task_bar;
mod task_modal;

pub use calendar_grid::CalendarGrid;
pub use filter_sidebar::FilterSidebar;
pub use month_nav::MonthNav;
pub use task_bar::TaskBar;
pub use task_modal::TaskModal;

/// CSS class carrying a category's
/// fixed color.
pub(crate) fn category_color_class(
  category: Category
) -> String {
  format!("cat-{}", category.color())
}
