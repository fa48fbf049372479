mod category_select;
mod todo_form;
mod todo_list;
mod todo_row;

pub use category_select::CategorySelect;
pub use todo_form::{
  FormField,
  TodoForm
};
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
